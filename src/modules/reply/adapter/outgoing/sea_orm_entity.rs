use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::{
    reply::domain::entities::Reply,
    user::domain::entities::{User, UserId},
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "replies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub topic_id: Uuid,

    pub author_id: Uuid,

    pub content: String,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// `author` is whatever the caller managed to load for `author_id`.
    pub fn to_domain(&self, author: Option<User>) -> Reply {
        Reply {
            id: self.id,
            topic_id: self.topic_id,
            author_id: UserId::from(self.author_id),
            content: self.content.clone(),
            deleted: self.is_deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
            author,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::topic::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TopicId",
        to = "crate::modules::topic::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Topic,
    #[sea_orm(
        belongs_to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::AuthorId",
        to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Author,
}

impl ActiveModelBehavior for ActiveModel {}
