//! A postal address.

use sea_orm::entity::prelude::*;

pub type AddressModel = Model;

/// A postal address that operators are registered at.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "address")]
pub struct Model {
    /// Unique numeric ID of the address.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Lowercased, whitespace-collapsed number, postcode and country.
    ///
    /// Lookups ignoring case match on this column, and it carries the
    /// unique index.
    pub natural_key: String,

    /// House name or number.
    pub number: String,

    pub street: String,

    pub town: String,

    pub county: String,

    pub postcode: String,

    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::operator::Entity")]
    Operator,
}

impl Related<super::operator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
