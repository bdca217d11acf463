//! An application user.

use sea_orm::entity::prelude::*;

pub type UserModel = Model;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    /// Unique numeric ID of the user.
    #[sea_orm(primary_key)]
    pub id: i64,

    pub natural_key: String,

    /// Login name of the user.
    pub user_name: String,

    /// PHC-formatted password hash.
    ///
    /// The password itself is never stored.
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
