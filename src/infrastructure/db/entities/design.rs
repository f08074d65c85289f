use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "designs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique, indexed)]
    pub code: String,

    pub product_id: String,

    #[sea_orm(column_type = "Text")]
    pub svg: String,

    /// Client-supplied state, kept as serialized JSON.
    #[sea_orm(column_type = "Text", nullable)]
    pub state_json: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
