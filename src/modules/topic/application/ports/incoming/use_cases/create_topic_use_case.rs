use async_trait::async_trait;
use uuid::Uuid;

use crate::{topic::application::domain::entities::Topic, user::domain::entities::UserId};

pub const TITLE_MAX_LEN: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    author_id: UserId,
    category_id: Uuid,
    title: String,
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Content cannot be empty")]
    EmptyContent,
}

impl CreateTopicCommand {
    pub fn new(
        author_id: UserId,
        category_id: Uuid,
        title: String,
        content: String,
    ) -> Result<Self, CreateTopicCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(CreateTopicCommandError::EmptyTitle);
        }

        if title.chars().count() > TITLE_MAX_LEN {
            return Err(CreateTopicCommandError::TitleTooLong);
        }

        let content = content.trim();

        if content.is_empty() {
            return Err(CreateTopicCommandError::EmptyContent);
        }

        Ok(Self {
            author_id,
            category_id,
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}
