use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::topic::application::{
    domain::entities::TopicError,
    ports::{
        incoming::use_cases::{
            GetTopicParticipantsError, GetTopicParticipantsUseCase, TopicParticipants,
        },
        outgoing::TopicQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetTopicParticipantsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicParticipantsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicParticipantsUseCase for GetTopicParticipantsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
    ) -> Result<TopicParticipants, GetTopicParticipantsError> {
        let topic = self
            .query
            .find_topic_with_relations(topic_id)
            .await
            .map_err(|e| GetTopicParticipantsError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicParticipantsError::TopicNotFound)?;

        let participants = topic.authors().map_err(|e| match e {
            TopicError::AuthorNotLoaded => {
                warn!(%topic_id, author_id = %topic.author_id, "Topic author row is missing");
                GetTopicParticipantsError::AuthorNotLoaded
            }
        })?;

        Ok(TopicParticipants {
            topic_id,
            participants,
        })
    }
}
