use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicActivityError, GetTopicActivityUseCase, TopicActivity},
    outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetTopicActivityService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicActivityService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicActivityUseCase for GetTopicActivityService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: Uuid) -> Result<TopicActivity, GetTopicActivityError> {
        let topic = self
            .query
            .find_topic_with_replies(topic_id)
            .await
            .map_err(|e| GetTopicActivityError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicActivityError::TopicNotFound)?;

        Ok(TopicActivity {
            topic_id,
            reply_count: topic.replies.len(),
            last_update: topic.last_update(),
        })
    }
}
