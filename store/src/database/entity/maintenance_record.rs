//! A maintenance or modification carried out on a drone.

use sea_orm::entity::prelude::*;

pub type MaintenanceRecordModel = Model;

/// The kind of work recorded.
#[derive(EnumIter, DeriveActiveEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[sea_orm(rs_type = "String", db_type = "String(Some(1))")]
pub enum RecordType {
    /// Routine maintenance.
    #[sea_orm(string_value = "M")]
    Maintenance,

    /// A change to the airframe or its equipment.
    #[sea_orm(string_value = "X")]
    Modification,
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_record")]
pub struct Model {
    /// Unique numeric ID of the record.
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(indexed)]
    pub maintainer_id: i64,

    #[sea_orm(indexed)]
    pub drone_id: i64,

    /// Timestamp when the work was completed.
    pub date_completed: ChronoDateTime,

    pub record_type: RecordType,

    pub description: String,

    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::maintainer::Entity",
        from = "Column::MaintainerId",
        to = "super::maintainer::Column::Id"
    )]
    Maintainer,

    #[sea_orm(
        belongs_to = "super::drone::Entity",
        from = "Column::DroneId",
        to = "super::drone::Column::Id"
    )]
    Drone,
}

impl Related<super::maintainer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Maintainer.def()
    }
}

impl Related<super::drone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
