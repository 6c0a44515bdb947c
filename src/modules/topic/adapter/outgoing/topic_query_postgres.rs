use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::category::adapter::outgoing::sea_orm_entity::Entity as CategoryEntity;
use crate::modules::reply::adapter::outgoing::sea_orm_entity::{
    Column as ReplyColumn, Entity as ReplyEntity, Model as ReplyModel,
};
use crate::modules::topic::application::domain::entities::Topic;
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};
use crate::modules::user::adapter::outgoing::sea_orm_entity::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::user::domain::entities::User;

// SeaORM entity
use super::sea_orm_entity::Entity as TopicEntity;

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> TopicQueryError {
        TopicQueryError::DatabaseError(e.to_string())
    }

    async fn load_replies(&self, topic_id: Uuid) -> Result<Vec<ReplyModel>, TopicQueryError> {
        ReplyEntity::find()
            .filter(ReplyColumn::TopicId.eq(topic_id))
            .order_by_asc(ReplyColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)
    }

    /// One `IN (...)` lookup for every distinct reply author. Ids without a
    /// user row are simply absent from the map.
    async fn load_reply_authors(
        &self,
        replies: &[ReplyModel],
    ) -> Result<HashMap<Uuid, User>, TopicQueryError> {
        let ids: HashSet<Uuid> = replies.iter().map(|r| r.author_id).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = UserEntity::find()
            .filter(UserColumn::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(users.into_iter().map(|u| (u.id, u.to_domain())).collect())
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_topic_with_replies(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<Topic>, TopicQueryError> {
        let Some(model) = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
        else {
            return Ok(None);
        };

        let mut topic = model.to_domain();
        topic.replies = self
            .load_replies(topic_id)
            .await?
            .iter()
            .map(|r| r.to_domain(None))
            .collect();

        Ok(Some(topic))
    }

    async fn find_topic_with_relations(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<Topic>, TopicQueryError> {
        let Some(model) = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
        else {
            return Ok(None);
        };

        let mut topic = model.to_domain();

        topic.author = UserEntity::find_by_id(model.author_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|u| u.to_domain());

        topic.category = CategoryEntity::find_by_id(model.category_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|c| c.to_domain());

        let replies = self.load_replies(topic_id).await?;

        let authors = self.load_reply_authors(&replies).await?;

        topic.replies = replies
            .iter()
            .map(|r| r.to_domain(authors.get(&r.author_id).cloned()))
            .collect();

        Ok(Some(topic))
    }
}
