use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Scalar fields and subscribers only; `author`, `category` and `replies`
    /// are left unloaded. Soft-deleted topics are returned as well.
    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError>;

    /// Same as [`TopicQuery::find_topic`] with replies attached in posting
    /// order. Reply authors stay unloaded.
    async fn find_topic_with_replies(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<Topic>, TopicQueryError>;

    /// Same as [`TopicQuery::find_topic`] with author, category and replies
    /// (each with its author where the user row exists) materialized.
    async fn find_topic_with_relations(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<Topic>, TopicQueryError>;
}
