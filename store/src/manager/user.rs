//! Application users.

use std::sync::Arc;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::password::{hash_password, verify_password, Verification};
use super::display_key;
use crate::context::Context;
use crate::database::entity::user::{self, Entity as User, UserModel};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::User;

/// Manages users and their passwords.
///
/// User names are compared ignoring case. Only password hashes are
/// stored.
pub struct UserManager {
    context: Arc<Context>,
}

impl UserManager {
    pub fn new(context: Arc<Context>) -> Self {
        Self { context }
    }

    pub async fn add_user(&self, user_name: &str, password: &str) -> StoreResult<UserModel> {
        let user_name = normalize::clean(user_name);
        let key = display_key([&user_name]);

        let natural_key = normalize::key(&user_name);
        self.context.claim(KIND, &natural_key).await?;

        if self.find_user(&user_name).await?.is_some() {
            return Err(StoreError::exists(KIND, key));
        }

        let password_hash = hash_password(password)?;

        let db = self.context.staged().await?;
        let model = user::ActiveModel {
            natural_key: Set(natural_key),
            user_name: Set(user_name),
            password_hash: Set(password_hash),
            ..Default::default()
        }
        .insert(&*db)
        .await
        .map_err(|e| StoreError::write_error(e, KIND, &key))?;

        tracing::debug!("Staged user {}", model.user_name);

        Ok(model)
    }

    /// Returns a user by name.
    pub async fn get_user(&self, user_name: &str) -> StoreResult<UserModel> {
        self.find_user(user_name)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, display_key([normalize::clean(user_name)])))
    }

    pub async fn list_users(&self) -> StoreResult<Vec<UserModel>> {
        let db = self.context.staged().await?;

        let users = User::find()
            .order_by_asc(user::Column::UserName)
            .all(&*db)
            .await?;

        Ok(users)
    }

    /// Checks a user's password.
    ///
    /// A missing user is an error, not a failed check. If the password
    /// matches a hash made with outdated parameters, the password is
    /// hashed again and the new hash is staged.
    pub async fn authenticate(&self, user_name: &str, password: &str) -> StoreResult<bool> {
        let user = self.get_user(user_name).await?;

        match verify_password(password, &user.password_hash)? {
            Verification::Invalid => Ok(false),
            Verification::Valid => Ok(true),
            Verification::ValidNeedsRehash => {
                tracing::info!("Rehashing outdated password hash of {}", user.user_name);
                self.store_hash(user, password).await?;
                Ok(true)
            }
        }
    }

    pub async fn set_password(&self, user_name: &str, password: &str) -> StoreResult<UserModel> {
        let user = self.get_user(user_name).await?;
        self.store_hash(user, password).await
    }

    pub async fn delete_user(&self, user_name: &str) -> StoreResult<()> {
        let user = self.get_user(user_name).await?;

        let db = self.context.staged().await?;
        User::delete_by_id(user.id).exec(&*db).await?;

        tracing::debug!("Staged deletion of user {}", user.user_name);

        Ok(())
    }

    async fn find_user(&self, user_name: &str) -> StoreResult<Option<UserModel>> {
        let db = self.context.staged().await?;

        let user = User::find()
            .filter(user::Column::NaturalKey.eq(normalize::key(user_name)))
            .one(&*db)
            .await?;

        Ok(user)
    }

    async fn store_hash(&self, user: UserModel, password: &str) -> StoreResult<UserModel> {
        let password_hash = hash_password(password)?;

        let mut model: user::ActiveModel = user.into();
        model.password_hash = Set(password_hash);

        let db = self.context.staged().await?;
        let model = model.update(&*db).await?;

        Ok(model)
    }
}
