//! Maintainers.

use std::sync::Arc;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{display_key, id_key};
use crate::context::Context;
use crate::database::entity::maintainer::{self, Entity as Maintainer, MaintainerModel};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::Maintainer;

pub struct MaintainerManager {
    context: Arc<Context>,
}

fn natural_key(first_names: &str, surname: &str) -> String {
    normalize::compound_key([first_names, surname])
}

impl MaintainerManager {
    pub fn new(context: Arc<Context>) -> Self {
        Self { context }
    }

    pub async fn get(&self, id: i64) -> StoreResult<MaintainerModel> {
        let db = self.context.staged().await?;

        Maintainer::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Finds a maintainer by name, ignoring case.
    pub async fn find(
        &self,
        first_names: &str,
        surname: &str,
    ) -> StoreResult<Option<MaintainerModel>> {
        let db = self.context.staged().await?;

        let maintainer = Maintainer::find()
            .filter(maintainer::Column::NaturalKey.eq(natural_key(first_names, surname)))
            .one(&*db)
            .await?;

        Ok(maintainer)
    }

    pub async fn list(&self) -> StoreResult<Vec<MaintainerModel>> {
        let db = self.context.staged().await?;

        let maintainers = Maintainer::find()
            .order_by_asc(maintainer::Column::Surname)
            .order_by_asc(maintainer::Column::FirstNames)
            .all(&*db)
            .await?;

        Ok(maintainers)
    }

    pub async fn add(&self, first_names: &str, surname: &str) -> StoreResult<MaintainerModel> {
        let first_names = normalize::clean(first_names);
        let surname = normalize::clean(surname);
        let key = display_key([&first_names, &surname]);

        let natural_key = natural_key(&first_names, &surname);
        self.context.claim(KIND, &natural_key).await?;

        if self.find(&first_names, &surname).await?.is_some() {
            return Err(StoreError::exists(KIND, key));
        }

        let db = self.context.staged().await?;
        let model = maintainer::ActiveModel {
            natural_key: Set(natural_key),
            first_names: Set(first_names),
            surname: Set(surname),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged maintainer {}", model.id);

        Ok(model)
    }

    pub async fn update(
        &self,
        id: i64,
        first_names: &str,
        surname: &str,
    ) -> StoreResult<MaintainerModel> {
        let first_names = normalize::clean(first_names);
        let surname = normalize::clean(surname);
        let key = display_key([&first_names, &surname]);

        let natural_key = natural_key(&first_names, &surname);
        self.context.claim(KIND, &natural_key).await?;

        if let Some(existing) = self.find(&first_names, &surname).await? {
            if existing.id != id {
                return Err(StoreError::exists(KIND, key));
            }
        }

        let mut model: maintainer::ActiveModel = self.get(id).await?.into();
        model.natural_key = Set(natural_key);
        model.first_names = Set(first_names);
        model.surname = Set(surname);

        let db = self.context.staged().await?;
        model
            .update(&*db)
            .await
            .map_err(|e| StoreError::write_error(e, KIND, &key))
    }
}
