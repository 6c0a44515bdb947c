use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicActivityError, AppState,
};

#[get("/api/topics/{topic_id}/activity")]
pub async fn get_topic_activity_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.get_topic_activity_use_case.execute(topic_id).await {
        Ok(activity) => ApiResponse::success(activity),
        Err(GetTopicActivityError::TopicNotFound) => ApiResponse::topic_not_found(),
        Err(GetTopicActivityError::QueryFailed(msg)) => {
            error!(%topic_id, "Query error loading topic activity: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
