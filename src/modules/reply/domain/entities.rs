use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use uuid::Uuid;

use crate::user::domain::entities::{User, UserId};

/// A single response inside a topic.
///
/// `author` is only present when the loader materialized it; `None` means
/// "not loaded", never "no author".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub author_id: UserId,
    pub content: String,
    pub deleted: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(skip)]
    pub author: Option<User>,
}
