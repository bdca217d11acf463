//! Drones.

use std::sync::Arc;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{display_key, id_key, ModelManager};
use crate::context::Context;
use crate::database::entity::drone::{self, DroneModel, Entity as Drone};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::Drone;

/// Manages drones.
///
/// Serial numbers are unique per model.
pub struct DroneManager {
    context: Arc<Context>,
    models: Arc<ModelManager>,
}

fn natural_key(serial_number: &str, model_id: i64) -> String {
    normalize::compound_key([serial_number, &model_id.to_string()])
}

impl DroneManager {
    pub fn new(context: Arc<Context>, models: Arc<ModelManager>) -> Self {
        Self { context, models }
    }

    pub async fn get(&self, id: i64) -> StoreResult<DroneModel> {
        let db = self.context.staged().await?;

        Drone::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Finds a drone of a model by serial number, ignoring case.
    pub async fn find(&self, serial_number: &str, model_id: i64) -> StoreResult<Option<DroneModel>> {
        let db = self.context.staged().await?;

        let drone = Drone::find()
            .filter(drone::Column::NaturalKey.eq(natural_key(serial_number, model_id)))
            .one(&*db)
            .await?;

        Ok(drone)
    }

    /// Returns all drones, optionally only those of one model.
    pub async fn list(&self, model_id: Option<i64>) -> StoreResult<Vec<DroneModel>> {
        let db = self.context.staged().await?;

        let mut query = Drone::find();
        if let Some(model_id) = model_id {
            query = query.filter(drone::Column::ModelId.eq(model_id));
        }

        let drones = query.order_by_asc(drone::Column::Name).all(&*db).await?;

        Ok(drones)
    }

    pub async fn add(
        &self,
        name: &str,
        serial_number: &str,
        model_id: i64,
    ) -> StoreResult<DroneModel> {
        self.models.get(model_id).await?;

        let name = normalize::clean(name);
        let serial_number = normalize::clean(serial_number);
        let key = display_key([serial_number.clone(), id_key(model_id)]);
        let natural_key = natural_key(&serial_number, model_id);
        self.context.claim(KIND, &natural_key).await?;

        if self.find(&serial_number, model_id).await?.is_some() {
            return Err(StoreError::exists(KIND, key));
        }

        let db = self.context.staged().await?;
        let model = drone::ActiveModel {
            natural_key: Set(natural_key),
            name: Set(name),
            serial_number: Set(serial_number),
            model_id: Set(model_id),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged drone {}", model.id);

        Ok(model)
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        serial_number: &str,
        model_id: i64,
    ) -> StoreResult<DroneModel> {
        self.models.get(model_id).await?;

        let name = normalize::clean(name);
        let serial_number = normalize::clean(serial_number);
        let key = display_key([serial_number.clone(), id_key(model_id)]);
        let natural_key = natural_key(&serial_number, model_id);
        self.context.claim(KIND, &natural_key).await?;

        if let Some(existing) = self.find(&serial_number, model_id).await? {
            if existing.id != id {
                return Err(StoreError::exists(KIND, key));
            }
        }

        let mut model: drone::ActiveModel = self.get(id).await?.into();
        model.natural_key = Set(natural_key);
        model.name = Set(name);
        model.serial_number = Set(serial_number);
        model.model_id = Set(model_id);

        let db = self.context.staged().await?;
        model
            .update(&*db)
            .await
            .map_err(|e| StoreError::write_error(e, KIND, &key))
    }
}
