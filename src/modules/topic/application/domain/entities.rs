use std::collections::{HashMap, HashSet};

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    category::domain::entities::Category,
    reply::domain::entities::Reply,
    user::domain::entities::{User, UserId},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicError {
    /// `authors()` needs the topic author to be materialized first.
    #[error("Topic author has not been loaded")]
    AuthorNotLoaded,
}

/// A discussion thread together with whatever relations the loader attached.
///
/// `subscribers` is a set kept as a flat list at the storage boundary. Its
/// order carries no meaning and may change on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub id: Uuid,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub category_id: Uuid,
    pub deleted: bool,
    pub subscribers: Vec<UserId>,

    #[serde(skip)]
    pub author: Option<User>,
    #[serde(skip)]
    pub category: Option<Category>,
    #[serde(skip)]
    pub replies: Vec<Reply>,
}

impl Topic {
    //
    // ──────────────────────────────────────────────────────────
    // Subscribers
    // ──────────────────────────────────────────────────────────
    //

    pub fn is_subscribed(&self, user_id: UserId) -> bool {
        self.subscribers.iter().any(|sub| *sub == user_id)
    }

    /// Ensures `user_id` is present exactly once. Existing duplicates are
    /// collapsed as a side effect.
    pub fn add_subscriber(&mut self, user_id: UserId) {
        let set: HashSet<UserId> = std::iter::once(user_id)
            .chain(self.subscribers.drain(..))
            .collect();

        self.subscribers = set.into_iter().collect();
    }

    /// Ensures `user_id` is absent. Removing a non-member still collapses
    /// duplicates left by storage.
    pub fn remove_subscriber(&mut self, user_id: UserId) {
        let set: HashSet<UserId> = self
            .subscribers
            .drain(..)
            .filter(|sub| *sub != user_id)
            .collect();

        self.subscribers = set.into_iter().collect();
    }

    //
    // ──────────────────────────────────────────────────────────
    // Derived views
    // ──────────────────────────────────────────────────────────
    //

    /// Distinct contributors: the topic author plus every reply author whose
    /// record was loaded. The first record seen for an id wins; reply authors
    /// that were not materialized are left out. No ordering is guaranteed.
    pub fn authors(&self) -> Result<Vec<User>, TopicError> {
        let author = self.author.as_ref().ok_or(TopicError::AuthorNotLoaded)?;

        let mut set: HashMap<UserId, User> = HashMap::with_capacity(1 + self.replies.len());
        set.insert(author.id, author.clone());

        for reply in &self.replies {
            if set.contains_key(&reply.author_id) {
                continue;
            }
            if let Some(reply_author) = &reply.author {
                set.insert(reply.author_id, reply_author.clone());
            }
        }

        Ok(set.into_values().collect())
    }

    /// Most recent change across the topic and all of its replies, in UTC.
    pub fn last_update(&self) -> DateTime<Utc> {
        let initial = latest(self.created_at, self.updated_at);

        self.replies.iter().fold(initial, |acc, reply| {
            let acc = latest(acc, reply.created_at);
            latest(acc, reply.updated_at)
        })
    }
}

fn latest<A, B>(a: DateTime<A>, b: DateTime<B>) -> DateTime<Utc>
where
    A: chrono::TimeZone,
    B: chrono::TimeZone,
{
    let a = a.with_timezone(&Utc);
    let b = b.with_timezone(&Utc);
    if a > b {
        a
    } else {
        b
    }
}
