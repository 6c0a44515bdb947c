// src/modules/topic/adapter/incoming/web/routes/soft_delete_topic.rs
use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::SoftDeleteTopicError,
    user::domain::entities::UserId, AppState,
};

#[derive(Debug, Deserialize)]
pub struct SoftDeleteTopicRequest {
    pub user_id: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[delete("/api/topics/{topic_id}")]
pub async fn soft_delete_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<SoftDeleteTopicRequest>,
) -> impl Responder {
    let actor = UserId::from(payload.user_id);
    let topic_id = path.into_inner();

    match data
        .soft_delete_topic_use_case
        .execute(actor, topic_id)
        .await
    {
        Ok(_) => ApiResponse::no_content(),
        Err(err) => map_soft_delete_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_soft_delete_topic_error(err: SoftDeleteTopicError) -> actix_web::HttpResponse {
    match err {
        SoftDeleteTopicError::TopicNotFound => ApiResponse::topic_not_found(),
        SoftDeleteTopicError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Only the topic author can delete it")
        }
        SoftDeleteTopicError::DatabaseError(msg) => {
            error!("Database error deleting topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
