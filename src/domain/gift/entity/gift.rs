use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gift")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub gift_name: String,
    /// 0 이상, 소수점 둘째 자리까지
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub link: Option<String>,
    pub party_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::party::entity::party::Entity",
        from = "Column::PartyId",
        to = "crate::domain::party::entity::party::Column::Uuid",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Party,
}

impl Related<crate::domain::party::entity::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
