//! Operators.

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{display_key, id_key, AddressManager};
use crate::context::Context;
use crate::database::entity::operator::{self, Entity as Operator, OperatorModel};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::Operator;

/// Fields of an operator to add or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOperator {
    pub first_names: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub flyer_number: String,
    pub operator_number: String,
    pub address_id: i64,
}

/// Manages operators.
///
/// An operator is identified by their names and the address they are
/// registered at.
pub struct OperatorManager {
    context: Arc<Context>,
    addresses: Arc<AddressManager>,
}

impl NewOperator {
    fn cleaned(self) -> Self {
        Self {
            first_names: normalize::clean(&self.first_names),
            surname: normalize::clean(&self.surname),
            flyer_number: normalize::clean(&self.flyer_number),
            operator_number: normalize::clean(&self.operator_number),
            ..self
        }
    }

    fn natural_key(&self) -> String {
        natural_key(&self.first_names, &self.surname, self.address_id)
    }

    fn display_key(&self) -> String {
        display_key([
            self.first_names.clone(),
            self.surname.clone(),
            id_key(self.address_id),
        ])
    }
}

fn natural_key(first_names: &str, surname: &str, address_id: i64) -> String {
    normalize::compound_key([first_names, surname, &address_id.to_string()])
}

impl OperatorManager {
    pub fn new(context: Arc<Context>, addresses: Arc<AddressManager>) -> Self {
        Self { context, addresses }
    }

    pub async fn get(&self, id: i64) -> StoreResult<OperatorModel> {
        let db = self.context.staged().await?;

        Operator::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Finds an operator by name and address, ignoring case.
    pub async fn find(
        &self,
        first_names: &str,
        surname: &str,
        address_id: i64,
    ) -> StoreResult<Option<OperatorModel>> {
        let db = self.context.staged().await?;

        let natural_key = natural_key(first_names, surname, address_id);
        let operator = Operator::find()
            .filter(operator::Column::NaturalKey.eq(natural_key))
            .one(&*db)
            .await?;

        Ok(operator)
    }

    /// Returns all operators, optionally only those at one address.
    pub async fn list(&self, address_id: Option<i64>) -> StoreResult<Vec<OperatorModel>> {
        let db = self.context.staged().await?;

        let mut query = Operator::find();
        if let Some(address_id) = address_id {
            query = query.filter(operator::Column::AddressId.eq(address_id));
        }

        let operators = query
            .order_by_asc(operator::Column::Surname)
            .order_by_asc(operator::Column::FirstNames)
            .all(&*db)
            .await?;

        Ok(operators)
    }

    pub async fn add(&self, operator: NewOperator) -> StoreResult<OperatorModel> {
        self.addresses.get(operator.address_id).await?;

        let operator = operator.cleaned();
        let key = operator.display_key();
        let natural_key = operator.natural_key();
        self.context.claim(KIND, &natural_key).await?;

        if self
            .find(&operator.first_names, &operator.surname, operator.address_id)
            .await?
            .is_some()
        {
            return Err(StoreError::exists(KIND, key));
        }

        let db = self.context.staged().await?;
        let model = operator::ActiveModel {
            natural_key: Set(natural_key),
            first_names: Set(operator.first_names),
            surname: Set(operator.surname),
            date_of_birth: Set(operator.date_of_birth),
            flyer_number: Set(operator.flyer_number),
            operator_number: Set(operator.operator_number),
            address_id: Set(operator.address_id),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged operator {}", model.id);

        Ok(model)
    }

    pub async fn update(&self, id: i64, operator: NewOperator) -> StoreResult<OperatorModel> {
        self.addresses.get(operator.address_id).await?;

        let operator = operator.cleaned();
        let key = operator.display_key();
        let natural_key = operator.natural_key();
        self.context.claim(KIND, &natural_key).await?;

        if let Some(existing) = self
            .find(&operator.first_names, &operator.surname, operator.address_id)
            .await?
        {
            if existing.id != id {
                return Err(StoreError::exists(KIND, key));
            }
        }

        let mut model: operator::ActiveModel = self.get(id).await?.into();
        model.natural_key = Set(natural_key);
        model.first_names = Set(operator.first_names);
        model.surname = Set(operator.surname);
        model.date_of_birth = Set(operator.date_of_birth);
        model.flyer_number = Set(operator.flyer_number);
        model.operator_number = Set(operator.operator_number);
        model.address_id = Set(operator.address_id);

        let db = self.context.staged().await?;
        model
            .update(&*db)
            .await
            .map_err(|e| StoreError::write_error(e, KIND, &key))
    }

    /// Moves an operator to another address.
    ///
    /// The address is checked before the operator.
    pub async fn set_operator_address(
        &self,
        operator_id: i64,
        address_id: i64,
    ) -> StoreResult<OperatorModel> {
        self.addresses.get(address_id).await?;

        let current = self.get(operator_id).await?;
        let key = display_key([
            current.first_names.clone(),
            current.surname.clone(),
            id_key(address_id),
        ]);
        let natural_key = natural_key(&current.first_names, &current.surname, address_id);
        self.context.claim(KIND, &natural_key).await?;

        if let Some(existing) = self
            .find(&current.first_names, &current.surname, address_id)
            .await?
        {
            if existing.id != operator_id {
                return Err(StoreError::exists(KIND, key));
            }
        }

        let mut model: operator::ActiveModel = current.into();
        model.natural_key = Set(natural_key);
        model.address_id = Set(address_id);

        let db = self.context.staged().await?;
        let model = model
            .update(&*db)
            .await
            .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Moved operator {} to address {}", operator_id, address_id);

        Ok(model)
    }
}
