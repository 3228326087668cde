use sea_orm::entity::prelude::*;

// One row per giver. The whole table is replaced on every run.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "SecretSanta")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "giver_id")]
    pub giver_id: i64,
    #[sea_orm(column_name = "receiver_id")]
    pub receiver_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
