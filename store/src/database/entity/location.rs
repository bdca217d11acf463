//! A flying site.

use sea_orm::entity::prelude::*;

pub type LocationModel = Model;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "location")]
pub struct Model {
    /// Unique numeric ID of the location.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Comparison key of the name.
    pub natural_key: String,

    /// Name of the location, unique ignoring case.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
