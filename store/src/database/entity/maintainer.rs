//! A person carrying out drone maintenance.

use sea_orm::entity::prelude::*;

pub type MaintainerModel = Model;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintainer")]
pub struct Model {
    /// Unique numeric ID of the maintainer.
    #[sea_orm(primary_key)]
    pub id: i64,

    pub natural_key: String,

    pub first_names: String,

    pub surname: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecord,
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
