//! Flight properties and their values.
//!
//! A property declares a value type. Values are passed in as
//! [`PropertyValue`]s and must carry the declared type, otherwise
//! [`StoreError::PropertyTypeMismatch`] is returned.

use std::sync::Arc;

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{display_key, id_key};
use crate::context::Context;
use crate::database::entity::flight_property::{
    self, DataType, Entity as FlightProperty, FlightPropertyModel,
};
use crate::database::entity::flight_property_value::{
    self, Entity as FlightPropertyValueEntity, FlightPropertyValueModel,
};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;
use skylog::property::{PropertyType, PropertyValue};

const KIND: EntityKind = EntityKind::FlightProperty;
const VALUE_KIND: EntityKind = EntityKind::FlightPropertyValue;

/// A property value together with the property it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPropertyValue {
    pub value: FlightPropertyValueModel,
    pub property: FlightPropertyModel,
}

/// Manages property definitions and the values attached to flights.
pub struct FlightPropertyManager {
    context: Arc<Context>,
}

/// The value columns of a value record, one of which is populated.
type ValueColumns = (Option<NaiveDateTime>, Option<f64>, Option<String>);

impl FlightPropertyManager {
    pub fn new(context: Arc<Context>) -> Self {
        Self { context }
    }

    /// Defines a new property.
    ///
    /// Property names are compared with exact casing.
    pub async fn add_property(
        &self,
        name: &str,
        data_type: PropertyType,
        is_single_instance: bool,
    ) -> StoreResult<FlightPropertyModel> {
        let name = normalize::clean(name);
        let key = display_key([&name]);

        // Claim names are lowercased, which only makes claims coarser.
        self.context.claim(KIND, &normalize::key(&name)).await?;

        if self.find_property(&name).await?.is_some() {
            return Err(StoreError::exists(KIND, key));
        }

        let db = self.context.staged().await?;
        let model = flight_property::ActiveModel {
            name: Set(name),
            data_type: Set(data_type.into()),
            is_single_instance: Set(is_single_instance),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged flight property {} ({})", model.name, data_type);

        Ok(model)
    }

    pub async fn get_property(&self, id: i64) -> StoreResult<FlightPropertyModel> {
        let db = self.context.staged().await?;

        FlightProperty::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Finds a property by its exact name.
    pub async fn find_property(&self, name: &str) -> StoreResult<Option<FlightPropertyModel>> {
        let db = self.context.staged().await?;

        let property = FlightProperty::find()
            .filter(flight_property::Column::Name.eq(normalize::clean(name)))
            .one(&*db)
            .await?;

        Ok(property)
    }

    pub async fn list_properties(&self) -> StoreResult<Vec<FlightPropertyModel>> {
        let db = self.context.staged().await?;

        let properties = FlightProperty::find()
            .order_by_asc(flight_property::Column::Name)
            .all(&*db)
            .await?;

        Ok(properties)
    }

    /// Attaches a value of a property to a flight.
    ///
    /// Fails with [`StoreError::ValueExists`] if the property is single
    /// instance and the flight already has a value for it.
    pub async fn add_property_value(
        &self,
        flight_id: i64,
        property_id: i64,
        value: PropertyValue,
    ) -> StoreResult<FlightPropertyValueModel> {
        let property = self.get_property(property_id).await?;

        if property.is_single_instance {
            self.context
                .claim(VALUE_KIND, &format!("{}\n{}", flight_id, property_id))
                .await?;

            let db = self.context.staged().await?;
            let existing = FlightPropertyValueEntity::find()
                .filter(flight_property_value::Column::FlightId.eq(flight_id))
                .filter(flight_property_value::Column::PropertyId.eq(property_id))
                .one(&*db)
                .await?;

            if existing.is_some() {
                return Err(StoreError::ValueExists {
                    flight_id,
                    property: property.name,
                });
            }
        }

        let (date_value, number_value, string_value) = value_columns(&property, value)?;

        let db = self.context.staged().await?;
        let model = flight_property_value::ActiveModel {
            flight_id: Set(flight_id),
            property_id: Set(property_id),
            date_value: Set(date_value),
            number_value: Set(number_value),
            string_value: Set(string_value),
            ..Default::default()
        }
        .insert(&*db)
        .await?;

        tracing::debug!(
            "Staged value {} of {} for flight {}",
            model.id,
            property.name,
            flight_id
        );

        Ok(model)
    }

    pub async fn get_property_value(&self, id: i64) -> StoreResult<FlightPropertyValueModel> {
        let db = self.context.staged().await?;

        FlightPropertyValueEntity::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(VALUE_KIND, id_key(id)))
    }

    /// Returns all values attached to a flight with their properties.
    pub async fn get_property_values(
        &self,
        flight_id: i64,
    ) -> StoreResult<Vec<FlightPropertyValue>> {
        let db = self.context.staged().await?;

        let rows = FlightPropertyValueEntity::find()
            .filter(flight_property_value::Column::FlightId.eq(flight_id))
            .find_also_related(FlightProperty)
            .order_by_asc(flight_property_value::Column::Id)
            .all(&*db)
            .await?;

        rows.into_iter()
            .map(|(value, property)| {
                let property = property
                    .ok_or_else(|| StoreError::not_found(KIND, id_key(value.property_id)))?;

                Ok(FlightPropertyValue { value, property })
            })
            .collect()
    }

    /// Replaces a stored value.
    ///
    /// The new value must match the declared type of the value's property.
    pub async fn update_property_value(
        &self,
        id: i64,
        value: PropertyValue,
    ) -> StoreResult<FlightPropertyValueModel> {
        let current = self.get_property_value(id).await?;
        let property = self.get_property(current.property_id).await?;
        let (date_value, number_value, string_value) = value_columns(&property, value)?;

        let mut model: flight_property_value::ActiveModel = current.into();
        model.date_value = Set(date_value);
        model.number_value = Set(number_value);
        model.string_value = Set(string_value);

        let db = self.context.staged().await?;
        let model = model.update(&*db).await?;

        Ok(model)
    }
}

/// Selects the column a value is stored in by the property's declared type.
fn value_columns(property: &FlightPropertyModel, value: PropertyValue) -> StoreResult<ValueColumns> {
    match (property.data_type, value) {
        (DataType::Date, PropertyValue::Date(date)) => Ok((Some(date), None, None)),
        (DataType::Number, PropertyValue::Number(number)) => Ok((None, Some(number), None)),
        (DataType::String, PropertyValue::String(string)) => Ok((None, None, Some(string))),
        (_, value) => Err(StoreError::PropertyTypeMismatch {
            property: property.name.clone(),
            expected: property.property_type(),
            actual: value.property_type(),
        }),
    }
}
