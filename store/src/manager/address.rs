//! Addresses.

use std::sync::Arc;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{display_key, id_key};
use crate::context::Context;
use crate::database::entity::address::{self, AddressModel, Entity as Address};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::Address;

/// Fields of an address to add or update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAddress {
    pub number: String,
    pub street: String,
    pub town: String,
    pub county: String,
    pub postcode: String,
    pub country: String,
}

pub struct AddressManager {
    context: Arc<Context>,
}

impl NewAddress {
    fn cleaned(&self) -> Self {
        Self {
            number: normalize::clean(&self.number),
            street: normalize::clean(&self.street),
            town: normalize::clean(&self.town),
            county: normalize::clean(&self.county),
            postcode: normalize::clean(&self.postcode),
            country: normalize::clean(&self.country),
        }
    }

    fn natural_key(&self) -> String {
        normalize::compound_key([
            self.number.as_str(),
            self.postcode.as_str(),
            self.country.as_str(),
        ])
    }

    fn display_key(&self) -> String {
        display_key([&self.number, &self.postcode, &self.country])
    }
}

impl AddressManager {
    pub fn new(context: Arc<Context>) -> Self {
        Self { context }
    }

    /// Returns the address with an ID.
    pub async fn get(&self, id: i64) -> StoreResult<AddressModel> {
        let db = self.context.staged().await?;

        Address::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Finds an address by its natural key, ignoring case.
    pub async fn find(
        &self,
        number: &str,
        postcode: &str,
        country: &str,
    ) -> StoreResult<Option<AddressModel>> {
        let db = self.context.staged().await?;

        let natural_key = normalize::compound_key([number, postcode, country]);
        let address = Address::find()
            .filter(address::Column::NaturalKey.eq(natural_key))
            .one(&*db)
            .await?;

        Ok(address)
    }

    /// Returns all addresses.
    pub async fn list(&self) -> StoreResult<Vec<AddressModel>> {
        let db = self.context.staged().await?;

        let addresses = Address::find()
            .order_by_asc(address::Column::Id)
            .all(&*db)
            .await?;

        Ok(addresses)
    }

    /// Stages a new address.
    pub async fn add(&self, address: NewAddress) -> StoreResult<AddressModel> {
        let address = address.cleaned();
        let natural_key = address.natural_key();
        self.context.claim(KIND, &natural_key).await?;

        if self
            .find(&address.number, &address.postcode, &address.country)
            .await?
            .is_some()
        {
            return Err(StoreError::exists(KIND, address.display_key()));
        }

        let key = address.display_key();
        let db = self.context.staged().await?;
        let model = address::ActiveModel {
            natural_key: Set(natural_key),
            number: Set(address.number),
            street: Set(address.street),
            town: Set(address.town),
            county: Set(address.county),
            postcode: Set(address.postcode),
            country: Set(address.country),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged address {}", model.id);

        Ok(model)
    }

    /// Stages changes to an existing address.
    pub async fn update(&self, id: i64, address: NewAddress) -> StoreResult<AddressModel> {
        let address = address.cleaned();
        let natural_key = address.natural_key();
        self.context.claim(KIND, &natural_key).await?;

        if let Some(existing) = self
            .find(&address.number, &address.postcode, &address.country)
            .await?
        {
            if existing.id != id {
                return Err(StoreError::exists(KIND, address.display_key()));
            }
        }

        let key = address.display_key();
        let mut model: address::ActiveModel = self.get(id).await?.into();
        model.natural_key = Set(natural_key);
        model.number = Set(address.number);
        model.street = Set(address.street);
        model.town = Set(address.town);
        model.county = Set(address.county);
        model.postcode = Set(address.postcode);
        model.country = Set(address.country);

        let db = self.context.staged().await?;
        model
            .update(&*db)
            .await
            .map_err(|e| StoreError::write_error(e, KIND, &key))
    }
}
