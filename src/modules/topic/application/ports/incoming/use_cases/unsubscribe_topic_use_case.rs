use async_trait::async_trait;
use uuid::Uuid;

use crate::user::domain::entities::UserId;

use super::TopicSubscription;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnsubscribeTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UnsubscribeTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: Uuid,
        user_id: UserId,
    ) -> Result<TopicSubscription, UnsubscribeTopicError>;
}
