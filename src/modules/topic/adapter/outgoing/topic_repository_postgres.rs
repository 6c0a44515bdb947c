use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError,
};
use crate::user::domain::entities::UserId;

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as TopicEntity,
    Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(data.author_id.into()),
            category_id: Set(data.category_id),
            title: Set(data.title),
            content: Set(data.content),
            subscribers: Set(Vec::new()),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn save_subscribers(
        &self,
        topic_id: Uuid,
        subscribers: Vec<UserId>,
    ) -> Result<(), TopicRepositoryError> {
        let ids: Vec<Uuid> = subscribers.into_iter().map(Uuid::from).collect();

        // Only the subscribers column is touched; the updated_at trigger
        // ignores it, so subscribing does not count as topic activity.
        let result = TopicEntity::update_many()
            .col_expr(TopicColumn::Subscribers, Expr::value(ids))
            .filter(TopicColumn::Id.eq(topic_id))
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }

    async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::update_many()
            .col_expr(TopicColumn::IsDeleted, Expr::value(true))
            .filter(TopicColumn::Id.eq(topic_id))
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}
