//! A drone model produced by a manufacturer.

use sea_orm::entity::prelude::*;

pub type DroneModelModel = Model;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "model")]
pub struct Model {
    /// Unique numeric ID of the model.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Comparison key of the name and the manufacturer ID.
    pub natural_key: String,

    /// Name of the model.
    ///
    /// Unique per manufacturer, ignoring case.
    pub name: String,

    /// ID of the manufacturer producing this model.
    #[sea_orm(indexed)]
    pub manufacturer_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::manufacturer::Entity",
        from = "Column::ManufacturerId",
        to = "super::manufacturer::Column::Id"
    )]
    Manufacturer,

    #[sea_orm(has_many = "super::drone::Entity")]
    Drone,
}

impl Related<super::manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturer.def()
    }
}

impl Related<super::drone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
