use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    topic::application::ports::{
        incoming::use_cases::{SoftDeleteTopicError, SoftDeleteTopicUseCase},
        outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
    },
    user::domain::entities::UserId,
};

#[derive(Debug, Clone)]
pub struct SoftDeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> SoftDeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> SoftDeleteTopicUseCase for SoftDeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, topic_id: Uuid) -> Result<(), SoftDeleteTopicError> {
        // 1️⃣ Load topic
        let topic = self
            .query
            .find_topic(topic_id)
            .await
            .map_err(|e| SoftDeleteTopicError::DatabaseError(e.to_string()))?
            .ok_or(SoftDeleteTopicError::TopicNotFound)?;

        // 2️⃣ Ensure authorship
        if topic.author_id != actor {
            warn!(%topic_id, %actor, "Refusing to delete topic owned by another user");
            return Err(SoftDeleteTopicError::Forbidden);
        }

        if topic.deleted {
            return Ok(());
        }

        // 3️⃣ Soft delete
        self.repository
            .soft_delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => SoftDeleteTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => {
                    SoftDeleteTopicError::DatabaseError(msg)
                }
            })?;

        info!(%topic_id, %actor, "Topic soft-deleted");
        Ok(())
    }
}
