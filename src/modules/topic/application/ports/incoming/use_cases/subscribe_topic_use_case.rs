use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::user::domain::entities::UserId;

/// Membership state of one user on one topic after a subscription call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSubscription {
    pub topic_id: Uuid,
    pub user_id: UserId,
    pub subscribed: bool,
    pub subscriber_count: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubscribeTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: Uuid,
        user_id: UserId,
    ) -> Result<TopicSubscription, SubscribeTopicError>;
}
