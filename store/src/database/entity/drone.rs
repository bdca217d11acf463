//! A single airframe.

use sea_orm::entity::prelude::*;

pub type DroneModel = Model;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drone")]
pub struct Model {
    /// Unique numeric ID of the drone.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Comparison key of the serial number and the model ID.
    pub natural_key: String,

    /// Friendly name of the drone.
    ///
    /// This is what flight logs refer to drones by.
    pub name: String,

    /// Serial number of the airframe.
    ///
    /// Unique per model, ignoring case.
    pub serial_number: String,

    /// ID of the model of this drone.
    #[sea_orm(indexed)]
    pub model_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::drone_model::Entity",
        from = "Column::ModelId",
        to = "super::drone_model::Column::Id"
    )]
    DroneModel,

    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,

    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecord,
}

impl Related<super::drone_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DroneModel.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
