use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::UnsubscribeTopicError,
    user::domain::entities::UserId, AppState,
};

#[delete("/api/topics/{topic_id}/subscribers/{user_id}")]
pub async fn unsubscribe_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (topic_id, user_id) = path.into_inner();
    let user_id = UserId::from(user_id);

    match data
        .unsubscribe_topic_use_case
        .execute(topic_id, user_id)
        .await
    {
        Ok(subscription) => ApiResponse::success(subscription),
        Err(UnsubscribeTopicError::TopicNotFound) => ApiResponse::topic_not_found(),
        Err(UnsubscribeTopicError::RepositoryError(msg)) => {
            error!(%topic_id, %user_id, "Repository error unsubscribing from topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
