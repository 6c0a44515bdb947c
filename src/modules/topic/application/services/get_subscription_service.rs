use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    topic::application::ports::{
        incoming::use_cases::{GetSubscriptionError, GetSubscriptionUseCase, TopicSubscription},
        outgoing::TopicQuery,
    },
    user::domain::entities::UserId,
};

#[derive(Debug, Clone)]
pub struct GetSubscriptionService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSubscriptionService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSubscriptionUseCase for GetSubscriptionService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
        user_id: UserId,
    ) -> Result<TopicSubscription, GetSubscriptionError> {
        let topic = self
            .query
            .find_topic(topic_id)
            .await
            .map_err(|e| GetSubscriptionError::QueryFailed(e.to_string()))?
            .ok_or(GetSubscriptionError::TopicNotFound)?;

        // Count distinct ids; the stored column may not be normalized yet.
        let subscriber_count = topic
            .subscribers
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len();

        Ok(TopicSubscription {
            topic_id: topic.id,
            user_id,
            subscribed: topic.is_subscribed(user_id),
            subscriber_count,
        })
    }
}
