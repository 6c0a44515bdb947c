use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    topic::application::ports::{
        incoming::use_cases::{SubscribeTopicError, SubscribeTopicUseCase, TopicSubscription},
        outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
    },
    user::domain::entities::UserId,
};

#[derive(Debug, Clone)]
pub struct SubscribeTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> SubscribeTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> SubscribeTopicUseCase for SubscribeTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
        user_id: UserId,
    ) -> Result<TopicSubscription, SubscribeTopicError> {
        // 1️⃣ Load the aggregate
        let mut topic = self
            .query
            .find_topic(topic_id)
            .await
            .map_err(|e| SubscribeTopicError::RepositoryError(e.to_string()))?
            .ok_or(SubscribeTopicError::TopicNotFound)?;

        // 2️⃣ Mutate the set
        if topic.is_subscribed(user_id) {
            debug!(%topic_id, %user_id, "Subscriber already present, saving normalized set");
        }
        topic.add_subscriber(user_id);

        // 3️⃣ Persist
        self.repository
            .save_subscribers(topic.id, topic.subscribers.clone())
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => SubscribeTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => {
                    SubscribeTopicError::RepositoryError(msg)
                }
            })?;

        info!(%topic_id, %user_id, "User subscribed to topic");

        Ok(TopicSubscription {
            topic_id: topic.id,
            user_id,
            subscribed: topic.is_subscribed(user_id),
            subscriber_count: topic.subscribers.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::collections::HashSet;

    use crate::{
        tests::support::{stubs::FakeTopicQuery, topic_fixtures::sample_topic},
        topic::application::{
            domain::entities::Topic,
            ports::outgoing::{CreateTopicData, TopicRepositoryError},
        },
    };

    mock! {
        pub TopicRepo {}
        #[async_trait]
        impl TopicRepository for TopicRepo {
            async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;
            async fn save_subscribers(&self, topic_id: Uuid, subscribers: Vec<UserId>) -> Result<(), TopicRepositoryError>;
            async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
        }
    }

    fn new_user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    fn set(ids: &[UserId]) -> HashSet<UserId> {
        ids.iter().copied().collect()
    }

    #[tokio::test]
    async fn subscribe_adds_user_and_saves_set() {
        // Arrange
        let (existing, user) = (new_user(), new_user());
        let mut topic = sample_topic(new_user());
        topic.subscribers = vec![existing];
        let topic_id = topic.id;

        let mut repo = MockTopicRepo::new();
        repo.expect_save_subscribers()
            .withf(move |id, subs| {
                *id == topic_id && subs.len() == 2 && set(subs) == set(&[existing, user])
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SubscribeTopicService::new(FakeTopicQuery::found(topic), repo);

        // Act
        let result = service.execute(topic_id, user).await.unwrap();

        // Assert
        assert_eq!(
            result,
            TopicSubscription {
                topic_id,
                user_id: user,
                subscribed: true,
                subscriber_count: 2,
            }
        );
    }

    #[tokio::test]
    async fn subscribe_twice_saves_same_set() {
        // Arrange
        let user = new_user();
        let mut topic = sample_topic(new_user());
        topic.subscribers = vec![user, user];
        let topic_id = topic.id;

        let mut repo = MockTopicRepo::new();
        repo.expect_save_subscribers()
            .withf(move |_, subs| subs == &vec![user])
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SubscribeTopicService::new(FakeTopicQuery::found(topic), repo);

        // Act
        let result = service.execute(topic_id, user).await.unwrap();

        // Assert
        assert!(result.subscribed);
        assert_eq!(result.subscriber_count, 1);
    }

    #[tokio::test]
    async fn subscribe_unknown_topic_returns_not_found() {
        let mut repo = MockTopicRepo::new();
        repo.expect_save_subscribers().never();

        let service = SubscribeTopicService::new(FakeTopicQuery::missing(), repo);

        let result = service.execute(Uuid::new_v4(), new_user()).await;

        assert!(matches!(result, Err(SubscribeTopicError::TopicNotFound)));
    }

    #[tokio::test]
    async fn subscribe_query_failure_is_mapped() {
        let mut repo = MockTopicRepo::new();
        repo.expect_save_subscribers().never();

        let service = SubscribeTopicService::new(FakeTopicQuery::failing("db down"), repo);

        let result = service.execute(Uuid::new_v4(), new_user()).await;

        match result {
            Err(SubscribeTopicError::RepositoryError(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn subscribe_topic_deleted_between_load_and_save() {
        let topic = sample_topic(new_user());
        let topic_id = topic.id;

        let mut repo = MockTopicRepo::new();
        repo.expect_save_subscribers()
            .times(1)
            .returning(|_, _| Err(TopicRepositoryError::TopicNotFound));

        let service = SubscribeTopicService::new(FakeTopicQuery::found(topic), repo);

        let result = service.execute(topic_id, new_user()).await;

        assert!(matches!(result, Err(SubscribeTopicError::TopicNotFound)));
    }

    #[tokio::test]
    async fn subscribe_save_failure_is_mapped() {
        let topic = sample_topic(new_user());
        let topic_id = topic.id;

        let mut repo = MockTopicRepo::new();
        repo.expect_save_subscribers()
            .times(1)
            .returning(|_, _| Err(TopicRepositoryError::DatabaseError("write failed".into())));

        let service = SubscribeTopicService::new(FakeTopicQuery::found(topic), repo);

        let result = service.execute(topic_id, new_user()).await;

        assert!(matches!(
            result,
            Err(SubscribeTopicError::RepositoryError(msg)) if msg == "write failed"
        ));
    }
}
