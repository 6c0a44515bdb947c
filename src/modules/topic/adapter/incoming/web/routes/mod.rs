mod create_topic;
mod get_subscription;
mod get_topic_activity;
mod get_topic_participants;
mod soft_delete_topic;
mod subscribe_topic;
mod unsubscribe_topic;

pub use create_topic::create_topic_handler;
pub use get_subscription::get_subscription_handler;
pub use get_topic_activity::get_topic_activity_handler;
pub use get_topic_participants::get_topic_participants_handler;
pub use soft_delete_topic::soft_delete_topic_handler;
pub use subscribe_topic::subscribe_topic_handler;
pub use unsubscribe_topic::unsubscribe_topic_handler;
