mod create_topic_use_case;
mod get_subscription_use_case;
mod get_topic_activity_use_case;
mod get_topic_participants_use_case;
mod soft_delete_topic_use_case;
mod subscribe_topic_use_case;
mod unsubscribe_topic_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
};
pub use get_subscription_use_case::{GetSubscriptionError, GetSubscriptionUseCase};
pub use get_topic_activity_use_case::{
    GetTopicActivityError, GetTopicActivityUseCase, TopicActivity,
};
pub use get_topic_participants_use_case::{
    GetTopicParticipantsError, GetTopicParticipantsUseCase, TopicParticipants,
};
pub use soft_delete_topic_use_case::{SoftDeleteTopicError, SoftDeleteTopicUseCase};
pub use subscribe_topic_use_case::{SubscribeTopicError, SubscribeTopicUseCase, TopicSubscription};
pub use unsubscribe_topic_use_case::{UnsubscribeTopicError, UnsubscribeTopicUseCase};
