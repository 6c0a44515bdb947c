use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicActivity {
    pub topic_id: Uuid,
    pub reply_count: usize,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicActivityError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicActivityUseCase: Send + Sync {
    async fn execute(&self, topic_id: Uuid) -> Result<TopicActivity, GetTopicActivityError>;
}
