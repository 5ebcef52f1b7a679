use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "party")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub party_date: Date,
    pub party_time: Time,
    #[sea_orm(column_type = "Text")]
    pub invitation: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub venue: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::gift::entity::gift::Entity")]
    Gift,
    #[sea_orm(has_many = "crate::domain::guest::entity::guest::Entity")]
    Guest,
}

impl Related<crate::domain::gift::entity::gift::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gift.def()
    }
}

impl Related<crate::domain::guest::entity::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
