use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
    },
    user::domain::entities::UserId,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub content: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/topics")]
pub async fn create_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match CreateTopicCommand::new(
        UserId::from(payload.author_id),
        payload.category_id,
        payload.title,
        payload.content,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.create_topic_use_case.execute(command).await {
        Ok(topic) => ApiResponse::created(topic),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> actix_web::HttpResponse {
    match err {
        CreateTopicCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateTopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 100 characters")
        }
        CreateTopicCommandError::EmptyContent => {
            ApiResponse::bad_request("EMPTY_CONTENT", "Content cannot be empty")
        }
    }
}

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::RepositoryError(msg) => {
            error!("Repository error creating topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
