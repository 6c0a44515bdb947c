use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, GetSubscriptionUseCase, GetTopicActivityUseCase,
    GetTopicParticipantsUseCase, SoftDeleteTopicUseCase, SubscribeTopicUseCase,
    UnsubscribeTopicUseCase,
};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case defaults to a stub that answers "not found"; tests swap in
/// the one they exercise.
pub struct TestAppStateBuilder {
    create_topic: Arc<dyn CreateTopicUseCase + Send + Sync>,
    subscribe_topic: Arc<dyn SubscribeTopicUseCase + Send + Sync>,
    unsubscribe_topic: Arc<dyn UnsubscribeTopicUseCase + Send + Sync>,
    get_subscription: Arc<dyn GetSubscriptionUseCase + Send + Sync>,
    get_topic_participants: Arc<dyn GetTopicParticipantsUseCase + Send + Sync>,
    get_topic_activity: Arc<dyn GetTopicActivityUseCase + Send + Sync>,
    soft_delete_topic: Arc<dyn SoftDeleteTopicUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_topic: Arc::new(StubCreateTopicUseCase),
            subscribe_topic: Arc::new(StubSubscribeTopicUseCase),
            unsubscribe_topic: Arc::new(StubUnsubscribeTopicUseCase),
            get_subscription: Arc::new(StubGetSubscriptionUseCase),
            get_topic_participants: Arc::new(StubGetTopicParticipantsUseCase),
            get_topic_activity: Arc::new(StubGetTopicActivityUseCase),
            soft_delete_topic: Arc::new(StubSoftDeleteTopicUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + 'static) -> Self {
        self.create_topic = Arc::new(uc);
        self
    }

    pub fn with_subscribe_topic(mut self, uc: impl SubscribeTopicUseCase + 'static) -> Self {
        self.subscribe_topic = Arc::new(uc);
        self
    }

    pub fn with_unsubscribe_topic(mut self, uc: impl UnsubscribeTopicUseCase + 'static) -> Self {
        self.unsubscribe_topic = Arc::new(uc);
        self
    }

    pub fn with_get_subscription(mut self, uc: impl GetSubscriptionUseCase + 'static) -> Self {
        self.get_subscription = Arc::new(uc);
        self
    }

    pub fn with_get_topic_participants(
        mut self,
        uc: impl GetTopicParticipantsUseCase + 'static,
    ) -> Self {
        self.get_topic_participants = Arc::new(uc);
        self
    }

    pub fn with_get_topic_activity(mut self, uc: impl GetTopicActivityUseCase + 'static) -> Self {
        self.get_topic_activity = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_topic(mut self, uc: impl SoftDeleteTopicUseCase + 'static) -> Self {
        self.soft_delete_topic = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_topic_use_case: self.create_topic,
            subscribe_topic_use_case: self.subscribe_topic,
            unsubscribe_topic_use_case: self.unsubscribe_topic,
            get_subscription_use_case: self.get_subscription,
            get_topic_participants_use_case: self.get_topic_participants,
            get_topic_activity_use_case: self.get_topic_activity,
            soft_delete_topic_use_case: self.soft_delete_topic,
        })
    }
}
