//! A registered drone operator.

use sea_orm::entity::prelude::*;

pub type OperatorModel = Model;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "operator")]
pub struct Model {
    /// Unique numeric ID of the operator.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Comparison key of the names and the address ID.
    pub natural_key: String,

    pub first_names: String,

    pub surname: String,

    pub date_of_birth: ChronoDate,

    /// Flyer ID issued to the remote pilot.
    pub flyer_number: String,

    /// Operator ID issued to the person responsible for the drones.
    ///
    /// Flight logs identify operators by this number.
    #[sea_orm(indexed)]
    pub operator_number: String,

    /// ID of the address the operator is registered at.
    #[sea_orm(indexed)]
    pub address_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::Id"
    )]
    Address,

    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
