//! Manufacturers.

use std::sync::Arc;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{display_key, id_key};
use crate::context::Context;
use crate::database::entity::manufacturer::{self, Entity as Manufacturer, ManufacturerModel};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::Manufacturer;

pub struct ManufacturerManager {
    context: Arc<Context>,
}

impl ManufacturerManager {
    pub fn new(context: Arc<Context>) -> Self {
        Self { context }
    }

    pub async fn get(&self, id: i64) -> StoreResult<ManufacturerModel> {
        let db = self.context.staged().await?;

        Manufacturer::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Finds a manufacturer by name, ignoring case.
    pub async fn find(&self, name: &str) -> StoreResult<Option<ManufacturerModel>> {
        let db = self.context.staged().await?;

        let manufacturer = Manufacturer::find()
            .filter(manufacturer::Column::NaturalKey.eq(normalize::key(name)))
            .one(&*db)
            .await?;

        Ok(manufacturer)
    }

    pub async fn list(&self) -> StoreResult<Vec<ManufacturerModel>> {
        let db = self.context.staged().await?;

        let manufacturers = Manufacturer::find()
            .order_by_asc(manufacturer::Column::Name)
            .all(&*db)
            .await?;

        Ok(manufacturers)
    }

    pub async fn add(&self, name: &str) -> StoreResult<ManufacturerModel> {
        let name = normalize::clean(name);
        let natural_key = normalize::key(&name);
        self.context.claim(KIND, &natural_key).await?;

        if self.find(&name).await?.is_some() {
            return Err(StoreError::exists(KIND, display_key([&name])));
        }

        let key = display_key([&name]);
        let db = self.context.staged().await?;
        let model = manufacturer::ActiveModel {
            natural_key: Set(natural_key),
            name: Set(name),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged manufacturer {}", model.id);

        Ok(model)
    }

    pub async fn update(&self, id: i64, name: &str) -> StoreResult<ManufacturerModel> {
        let name = normalize::clean(name);
        let natural_key = normalize::key(&name);
        self.context.claim(KIND, &natural_key).await?;

        if let Some(existing) = self.find(&name).await? {
            if existing.id != id {
                return Err(StoreError::exists(KIND, display_key([&name])));
            }
        }

        let key = display_key([&name]);
        let mut model: manufacturer::ActiveModel = self.get(id).await?.into();
        model.natural_key = Set(natural_key);
        model.name = Set(name);

        let db = self.context.staged().await?;
        model
            .update(&*db)
            .await
            .map_err(|e| StoreError::write_error(e, KIND, &key))
    }
}
