//! Drone models.

use std::sync::Arc;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{display_key, id_key, ManufacturerManager};
use crate::context::Context;
use crate::database::entity::drone_model::{self, DroneModelModel, Entity as DroneModel};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::Model;

/// Manages drone models.
///
/// Model names are unique per manufacturer.
pub struct ModelManager {
    context: Arc<Context>,
    manufacturers: Arc<ManufacturerManager>,
}

fn natural_key(name: &str, manufacturer_id: i64) -> String {
    normalize::compound_key([name, &manufacturer_id.to_string()])
}

impl ModelManager {
    pub fn new(context: Arc<Context>, manufacturers: Arc<ManufacturerManager>) -> Self {
        Self {
            context,
            manufacturers,
        }
    }

    pub async fn get(&self, id: i64) -> StoreResult<DroneModelModel> {
        let db = self.context.staged().await?;

        DroneModel::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Finds a model of a manufacturer by name, ignoring case.
    pub async fn find(
        &self,
        name: &str,
        manufacturer_id: i64,
    ) -> StoreResult<Option<DroneModelModel>> {
        let db = self.context.staged().await?;

        let model = DroneModel::find()
            .filter(drone_model::Column::NaturalKey.eq(natural_key(name, manufacturer_id)))
            .one(&*db)
            .await?;

        Ok(model)
    }

    /// Returns all models, optionally only those of one manufacturer.
    pub async fn list(&self, manufacturer_id: Option<i64>) -> StoreResult<Vec<DroneModelModel>> {
        let db = self.context.staged().await?;

        let mut query = DroneModel::find();
        if let Some(manufacturer_id) = manufacturer_id {
            query = query.filter(drone_model::Column::ManufacturerId.eq(manufacturer_id));
        }

        let models = query
            .order_by_asc(drone_model::Column::Name)
            .all(&*db)
            .await?;

        Ok(models)
    }

    pub async fn add(&self, name: &str, manufacturer_id: i64) -> StoreResult<DroneModelModel> {
        self.manufacturers.get(manufacturer_id).await?;

        let name = normalize::clean(name);
        let key = display_key([name.clone(), id_key(manufacturer_id)]);
        let natural_key = natural_key(&name, manufacturer_id);
        self.context.claim(KIND, &natural_key).await?;

        if self.find(&name, manufacturer_id).await?.is_some() {
            return Err(StoreError::exists(KIND, key));
        }

        let db = self.context.staged().await?;
        let model = drone_model::ActiveModel {
            natural_key: Set(natural_key),
            name: Set(name),
            manufacturer_id: Set(manufacturer_id),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged model {}", model.id);

        Ok(model)
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        manufacturer_id: i64,
    ) -> StoreResult<DroneModelModel> {
        self.manufacturers.get(manufacturer_id).await?;

        let name = normalize::clean(name);
        let key = display_key([name.clone(), id_key(manufacturer_id)]);
        let natural_key = natural_key(&name, manufacturer_id);
        self.context.claim(KIND, &natural_key).await?;

        if let Some(existing) = self.find(&name, manufacturer_id).await? {
            if existing.id != id {
                return Err(StoreError::exists(KIND, key));
            }
        }

        let mut model: drone_model::ActiveModel = self.get(id).await?.into();
        model.natural_key = Set(natural_key);
        model.name = Set(name);
        model.manufacturer_id = Set(manufacturer_id);

        let db = self.context.staged().await?;
        model
            .update(&*db)
            .await
            .map_err(|e| StoreError::write_error(e, KIND, &key))
    }
}
