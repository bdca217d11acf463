//! A user-defined flight property.

use sea_orm::entity::prelude::*;

use skylog::property::PropertyType;

pub type FlightPropertyModel = Model;

/// The declared value type of a property.
#[derive(EnumIter, DeriveActiveEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[sea_orm(rs_type = "String", db_type = "String(Some(1))")]
pub enum DataType {
    /// Values are timestamps.
    #[sea_orm(string_value = "D")]
    Date,

    /// Values are floating-point numbers.
    #[sea_orm(string_value = "N")]
    Number,

    /// Values are free text.
    #[sea_orm(string_value = "S")]
    String,
}

/// A typed attribute that can be attached to flights.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_property")]
pub struct Model {
    /// Unique numeric ID of the property.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Name of the property.
    ///
    /// Unlike other names, this one is unique with exact casing.
    #[sea_orm(unique, indexed)]
    pub name: String,

    /// Type of the values of this property.
    pub data_type: DataType,

    /// Whether a flight can have at most one value of this property.
    pub is_single_instance: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_property_value::Entity")]
    FlightPropertyValue,
}

impl Model {
    /// Returns the declared type of this property.
    pub fn property_type(&self) -> PropertyType {
        self.data_type.into()
    }
}

impl From<DataType> for PropertyType {
    fn from(data_type: DataType) -> Self {
        match data_type {
            DataType::Date => Self::Date,
            DataType::Number => Self::Number,
            DataType::String => Self::String,
        }
    }
}

impl From<PropertyType> for DataType {
    fn from(ty: PropertyType) -> Self {
        match ty {
            PropertyType::Date => Self::Date,
            PropertyType::Number => Self::Number,
            PropertyType::String => Self::String,
        }
    }
}

impl Related<super::flight_property_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightPropertyValue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
