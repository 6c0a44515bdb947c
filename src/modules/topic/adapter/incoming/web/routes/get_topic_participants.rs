use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicParticipantsError, AppState,
};

#[get("/api/topics/{topic_id}/participants")]
pub async fn get_topic_participants_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.get_topic_participants_use_case.execute(topic_id).await {
        Ok(participants) => ApiResponse::success(participants),
        Err(GetTopicParticipantsError::TopicNotFound) => ApiResponse::topic_not_found(),
        Err(GetTopicParticipantsError::AuthorNotLoaded) => {
            error!(%topic_id, "Topic author could not be loaded");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "AUTHOR_NOT_LOADED",
                "Topic author could not be loaded",
            )
        }
        Err(GetTopicParticipantsError::QueryFailed(msg)) => {
            error!(%topic_id, "Query error loading participants: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
