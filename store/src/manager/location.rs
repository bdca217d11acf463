//! Flying sites.

use std::sync::Arc;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{display_key, id_key};
use crate::context::Context;
use crate::database::entity::location::{self, Entity as Location, LocationModel};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::Location;

pub struct LocationManager {
    context: Arc<Context>,
}

impl LocationManager {
    pub fn new(context: Arc<Context>) -> Self {
        Self { context }
    }

    pub async fn get(&self, id: i64) -> StoreResult<LocationModel> {
        let db = self.context.staged().await?;

        Location::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Finds a location by name, ignoring case.
    pub async fn find(&self, name: &str) -> StoreResult<Option<LocationModel>> {
        let db = self.context.staged().await?;

        let location = Location::find()
            .filter(location::Column::NaturalKey.eq(normalize::key(name)))
            .one(&*db)
            .await?;

        Ok(location)
    }

    pub async fn list(&self) -> StoreResult<Vec<LocationModel>> {
        let db = self.context.staged().await?;

        let locations = Location::find()
            .order_by_asc(location::Column::Name)
            .all(&*db)
            .await?;

        Ok(locations)
    }

    pub async fn add(&self, name: &str) -> StoreResult<LocationModel> {
        let name = normalize::clean(name);
        let natural_key = normalize::key(&name);
        self.context.claim(KIND, &natural_key).await?;

        if self.find(&name).await?.is_some() {
            return Err(StoreError::exists(KIND, display_key([&name])));
        }

        let key = display_key([&name]);
        let db = self.context.staged().await?;
        let model = location::ActiveModel {
            natural_key: Set(natural_key),
            name: Set(name),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged location {}", model.id);

        Ok(model)
    }

    pub async fn update(&self, id: i64, name: &str) -> StoreResult<LocationModel> {
        let name = normalize::clean(name);
        let natural_key = normalize::key(&name);
        self.context.claim(KIND, &natural_key).await?;

        if let Some(existing) = self.find(&name).await? {
            if existing.id != id {
                return Err(StoreError::exists(KIND, display_key([&name])));
            }
        }

        let key = display_key([&name]);
        let mut model: location::ActiveModel = self.get(id).await?.into();
        model.natural_key = Set(natural_key);
        model.name = Set(name);

        let db = self.context.staged().await?;
        model
            .update(&*db)
            .await
            .map_err(|e| StoreError::write_error(e, KIND, &key))
    }
}
