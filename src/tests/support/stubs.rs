use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::{
    domain::entities::Topic,
    ports::{
        incoming::use_cases::{
            CreateTopicCommand, CreateTopicError, CreateTopicUseCase, GetSubscriptionError,
            GetSubscriptionUseCase, GetTopicActivityError, GetTopicActivityUseCase,
            GetTopicParticipantsError, GetTopicParticipantsUseCase, SoftDeleteTopicError,
            SoftDeleteTopicUseCase, SubscribeTopicError, SubscribeTopicUseCase, TopicActivity,
            TopicParticipants, TopicSubscription, UnsubscribeTopicError, UnsubscribeTopicUseCase,
        },
        outgoing::{TopicQuery, TopicQueryError},
    },
};
use crate::user::domain::entities::UserId;

// ============================================================
// Outgoing port fakes
// ============================================================

/// Answers every `TopicQuery` method with the same canned result.
#[derive(Clone)]
pub struct FakeTopicQuery {
    result: Result<Option<Topic>, TopicQueryError>,
}

impl FakeTopicQuery {
    pub fn found(topic: Topic) -> Self {
        Self {
            result: Ok(Some(topic)),
        }
    }

    pub fn missing() -> Self {
        Self { result: Ok(None) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(TopicQueryError::DatabaseError(message.to_string())),
        }
    }
}

#[async_trait]
impl TopicQuery for FakeTopicQuery {
    async fn find_topic(&self, _topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        self.result.clone()
    }

    async fn find_topic_with_replies(
        &self,
        _topic_id: Uuid,
    ) -> Result<Option<Topic>, TopicQueryError> {
        self.result.clone()
    }

    async fn find_topic_with_relations(
        &self,
        _topic_id: Uuid,
    ) -> Result<Option<Topic>, TopicQueryError> {
        self.result.clone()
    }
}

// ============================================================
// Use case stubs (defaults for TestAppStateBuilder)
// ============================================================

pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        Err(CreateTopicError::RepositoryError("stub".to_string()))
    }
}

pub struct StubSubscribeTopicUseCase;

#[async_trait]
impl SubscribeTopicUseCase for StubSubscribeTopicUseCase {
    async fn execute(
        &self,
        _topic_id: Uuid,
        _user_id: UserId,
    ) -> Result<TopicSubscription, SubscribeTopicError> {
        Err(SubscribeTopicError::TopicNotFound)
    }
}

pub struct StubUnsubscribeTopicUseCase;

#[async_trait]
impl UnsubscribeTopicUseCase for StubUnsubscribeTopicUseCase {
    async fn execute(
        &self,
        _topic_id: Uuid,
        _user_id: UserId,
    ) -> Result<TopicSubscription, UnsubscribeTopicError> {
        Err(UnsubscribeTopicError::TopicNotFound)
    }
}

pub struct StubGetSubscriptionUseCase;

#[async_trait]
impl GetSubscriptionUseCase for StubGetSubscriptionUseCase {
    async fn execute(
        &self,
        _topic_id: Uuid,
        _user_id: UserId,
    ) -> Result<TopicSubscription, GetSubscriptionError> {
        Err(GetSubscriptionError::TopicNotFound)
    }
}

pub struct StubGetTopicParticipantsUseCase;

#[async_trait]
impl GetTopicParticipantsUseCase for StubGetTopicParticipantsUseCase {
    async fn execute(
        &self,
        _topic_id: Uuid,
    ) -> Result<TopicParticipants, GetTopicParticipantsError> {
        Err(GetTopicParticipantsError::TopicNotFound)
    }
}

pub struct StubGetTopicActivityUseCase;

#[async_trait]
impl GetTopicActivityUseCase for StubGetTopicActivityUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<TopicActivity, GetTopicActivityError> {
        Err(GetTopicActivityError::TopicNotFound)
    }
}

pub struct StubSoftDeleteTopicUseCase;

#[async_trait]
impl SoftDeleteTopicUseCase for StubSoftDeleteTopicUseCase {
    async fn execute(&self, _actor: UserId, _topic_id: Uuid) -> Result<(), SoftDeleteTopicError> {
        Err(SoftDeleteTopicError::TopicNotFound)
    }
}
