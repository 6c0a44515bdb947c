use async_trait::async_trait;
use uuid::Uuid;

use crate::{topic::application::domain::entities::Topic, user::domain::entities::UserId};

// Input DTO for creating a topic
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub author_id: UserId,
    pub category_id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;

    /// Overwrites the stored subscriber column with `subscribers`.
    async fn save_subscribers(
        &self,
        topic_id: Uuid,
        subscribers: Vec<UserId>,
    ) -> Result<(), TopicRepositoryError>;

    async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
