//! A drone manufacturer.

use sea_orm::entity::prelude::*;

pub type ManufacturerModel = Model;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "manufacturer")]
pub struct Model {
    /// Unique numeric ID of the manufacturer.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Comparison key of the name.
    pub natural_key: String,

    /// Name of the manufacturer, unique ignoring case.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::drone_model::Entity")]
    DroneModel,
}

impl Related<super::drone_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DroneModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
