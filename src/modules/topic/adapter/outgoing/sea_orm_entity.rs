use crate::modules::topic::application::domain::entities::Topic;
use crate::user::domain::entities::UserId;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub author_id: Uuid,

    pub category_id: Uuid,

    pub title: String,

    pub content: String,

    /// Postgres `uuid[]`; written back as a normalized set.
    pub subscribers: Vec<Uuid>,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Scalar fields only; relations are attached by the query adapter.
    pub fn to_domain(&self) -> Topic {
        Topic {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            title: self.title.clone(),
            content: self.content.clone(),
            author_id: UserId::from(self.author_id),
            category_id: self.category_id,
            deleted: self.is_deleted,
            subscribers: self.subscribers.iter().copied().map(UserId::from).collect(),
            author: None,
            category: None,
            replies: Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::AuthorId",
        to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Author,
    #[sea_orm(
        belongs_to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Category,
}

impl ActiveModelBehavior for ActiveModel {}
