//! A value of a flight property attached to a flight.

use sea_orm::entity::prelude::*;

use skylog::property::PropertyValue;

pub type FlightPropertyValueModel = Model;

/// A value of a flight property.
///
/// Exactly one of the value columns is populated, matching the
/// declared type of the property.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_property_value")]
pub struct Model {
    /// Unique numeric ID of the value.
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(indexed)]
    pub flight_id: i64,

    #[sea_orm(indexed)]
    pub property_id: i64,

    pub date_value: Option<ChronoDateTime>,

    pub number_value: Option<f64>,

    pub string_value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id"
    )]
    Flight,

    #[sea_orm(
        belongs_to = "super::flight_property::Entity",
        from = "Column::PropertyId",
        to = "super::flight_property::Column::Id"
    )]
    FlightProperty,
}

impl Model {
    /// Returns the populated value, if any.
    pub fn value(&self) -> Option<PropertyValue> {
        if let Some(date) = self.date_value {
            Some(PropertyValue::Date(date))
        } else if let Some(number) = self.number_value {
            Some(PropertyValue::Number(number))
        } else {
            self.string_value.clone().map(PropertyValue::String)
        }
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::flight_property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightProperty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
