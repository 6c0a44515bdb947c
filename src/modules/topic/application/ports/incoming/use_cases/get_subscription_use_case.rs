use async_trait::async_trait;
use uuid::Uuid;

use crate::user::domain::entities::UserId;

use super::TopicSubscription;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSubscriptionError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSubscriptionUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: Uuid,
        user_id: UserId,
    ) -> Result<TopicSubscription, GetSubscriptionError>;
}
