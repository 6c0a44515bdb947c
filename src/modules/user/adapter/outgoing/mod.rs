pub mod sea_orm_entity;
