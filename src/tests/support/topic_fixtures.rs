use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use uuid::Uuid;

use crate::{
    reply::domain::entities::Reply,
    topic::application::domain::entities::Topic,
    user::domain::entities::{User, UserId},
};

/// Whole-hour UTC instant stored with a zero offset, the way Postgres hands
/// back `timestamptz` values.
pub fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0)
        .unwrap()
        .fixed_offset()
}

pub fn sample_user(username: &str) -> User {
    User {
        id: UserId::from(Uuid::new_v4()),
        username: username.to_string(),
        full_name: format!("{username} tester"),
        created_at: at(2024, 1, 1, 0),
        updated_at: at(2024, 1, 1, 0),
        is_deleted: false,
    }
}

/// Topic as `TopicQuery::find_topic` returns it: no relations loaded.
pub fn sample_topic(author_id: UserId) -> Topic {
    Topic {
        id: Uuid::new_v4(),
        created_at: at(2024, 3, 1, 10),
        updated_at: at(2024, 3, 1, 11),
        title: "Async traits".to_string(),
        content: "Are they stable yet?".to_string(),
        author_id,
        category_id: Uuid::new_v4(),
        deleted: false,
        subscribers: vec![],
        author: None,
        category: None,
        replies: vec![],
    }
}

pub fn sample_reply(
    topic_id: Uuid,
    author_id: UserId,
    author: Option<User>,
    created_at: DateTime<FixedOffset>,
    updated_at: DateTime<FixedOffset>,
) -> Reply {
    Reply {
        id: Uuid::new_v4(),
        topic_id,
        author_id,
        content: "+1".to_string(),
        deleted: false,
        created_at,
        updated_at,
        author,
    }
}
