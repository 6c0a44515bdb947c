use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetSubscriptionError,
    user::domain::entities::UserId, AppState,
};

#[get("/api/topics/{topic_id}/subscribers/{user_id}")]
pub async fn get_subscription_handler(
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (topic_id, user_id) = path.into_inner();

    match data
        .get_subscription_use_case
        .execute(topic_id, UserId::from(user_id))
        .await
    {
        Ok(subscription) => ApiResponse::success(subscription),
        Err(GetSubscriptionError::TopicNotFound) => ApiResponse::topic_not_found(),
        Err(GetSubscriptionError::QueryFailed(msg)) => {
            error!(%topic_id, "Query error reading subscription: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
