use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::{
    topic::application::ports::{
        incoming::use_cases::{TopicSubscription, UnsubscribeTopicError, UnsubscribeTopicUseCase},
        outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
    },
    user::domain::entities::UserId,
};

#[derive(Debug, Clone)]
pub struct UnsubscribeTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UnsubscribeTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UnsubscribeTopicUseCase for UnsubscribeTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
        user_id: UserId,
    ) -> Result<TopicSubscription, UnsubscribeTopicError> {
        let mut topic = self
            .query
            .find_topic(topic_id)
            .await
            .map_err(|e| UnsubscribeTopicError::RepositoryError(e.to_string()))?
            .ok_or(UnsubscribeTopicError::TopicNotFound)?;

        let was_subscribed = topic.is_subscribed(user_id);
        topic.remove_subscriber(user_id);

        // Saved even when nothing was removed so stored duplicates get collapsed.
        self.repository
            .save_subscribers(topic.id, topic.subscribers.clone())
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UnsubscribeTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => {
                    UnsubscribeTopicError::RepositoryError(msg)
                }
            })?;

        info!(%topic_id, %user_id, was_subscribed, "User unsubscribed from topic");

        Ok(TopicSubscription {
            topic_id: topic.id,
            user_id,
            subscribed: topic.is_subscribed(user_id),
            subscriber_count: topic.subscribers.len(),
        })
    }
}
