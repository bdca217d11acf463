//! A flight.

use sea_orm::entity::prelude::*;

pub type FlightModel = Model;

/// A flight of one drone by one operator at one location.
///
/// Flights have no natural key. Two flights with identical fields are
/// two distinct records.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    /// Unique numeric ID of the flight.
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(indexed)]
    pub drone_id: i64,

    #[sea_orm(indexed)]
    pub location_id: i64,

    #[sea_orm(indexed)]
    pub operator_id: i64,

    /// Timestamp when the flight started.
    pub start: ChronoDateTime,

    /// Timestamp when the flight ended.
    pub end: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::drone::Entity",
        from = "Column::DroneId",
        to = "super::drone::Column::Id"
    )]
    Drone,

    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,

    #[sea_orm(
        belongs_to = "super::operator::Entity",
        from = "Column::OperatorId",
        to = "super::operator::Column::Id"
    )]
    Operator,

    #[sea_orm(has_many = "super::flight_property_value::Entity")]
    FlightPropertyValue,
}

impl Related<super::drone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drone.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::operator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operator.def()
    }
}

impl Related<super::flight_property_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightPropertyValue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
