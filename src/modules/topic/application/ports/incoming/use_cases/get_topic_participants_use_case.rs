use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::user::domain::entities::User;

/// Everyone who wrote in a topic. `participants` has no defined order.
#[derive(Debug, Clone, Serialize)]
pub struct TopicParticipants {
    pub topic_id: Uuid,
    pub participants: Vec<User>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicParticipantsError {
    #[error("Topic not found")]
    TopicNotFound,

    /// The topic row references an author that could not be loaded.
    #[error("Topic author could not be loaded")]
    AuthorNotLoaded,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicParticipantsUseCase: Send + Sync {
    async fn execute(&self, topic_id: Uuid)
        -> Result<TopicParticipants, GetTopicParticipantsError>;
}
