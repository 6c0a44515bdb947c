mod create_topic_service;
mod get_subscription_service;
mod get_topic_activity_service;
mod get_topic_participants_service;
mod soft_delete_topic_service;
mod subscribe_topic_service;
mod unsubscribe_topic_service;

pub use create_topic_service::CreateTopicService;
pub use get_subscription_service::GetSubscriptionService;
pub use get_topic_activity_service::GetTopicActivityService;
pub use get_topic_participants_service::GetTopicParticipantsService;
pub use soft_delete_topic_service::SoftDeleteTopicService;
pub use subscribe_topic_service::SubscribeTopicService;
pub use unsubscribe_topic_service::UnsubscribeTopicService;
