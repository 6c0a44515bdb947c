mod topic_query_postgres;
mod topic_repository_postgres;

pub mod sea_orm_entity;

pub use topic_query_postgres::TopicQueryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;
