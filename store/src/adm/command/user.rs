use anyhow::{anyhow, Result};
use clap::Parser;

use crate::Opts;
use skylog_store::Store;

/// Add a user.
#[derive(Debug, Parser)]
pub struct AddUser {
    /// Name of the user.
    name: String,

    /// Password of the user.
    password: String,
}

/// Change the password of a user.
#[derive(Debug, Parser)]
pub struct SetPassword {
    /// Name of the user.
    name: String,

    /// The new password.
    password: String,
}

/// Delete a user.
#[derive(Debug, Parser)]
pub struct DeleteUser {
    /// Name of the user.
    name: String,
}

pub async fn add(store: Store, opts: Opts) -> Result<()> {
    let sub = opts
        .command
        .as_add_user()
        .ok_or_else(|| anyhow!("Not an add-user command"))?;

    let managers = store.managers();
    let user = managers.users.add_user(&sub.name, &sub.password).await?;
    managers.commit().await?;

    eprintln!("Added user {}", user.user_name);

    Ok(())
}

pub async fn set_password(store: Store, opts: Opts) -> Result<()> {
    let sub = opts
        .command
        .as_set_password()
        .ok_or_else(|| anyhow!("Not a set-password command"))?;

    let managers = store.managers();
    let user = managers.users.set_password(&sub.name, &sub.password).await?;
    managers.commit().await?;

    eprintln!("Changed the password of {}", user.user_name);

    Ok(())
}

pub async fn delete(store: Store, opts: Opts) -> Result<()> {
    let sub = opts
        .command
        .as_delete_user()
        .ok_or_else(|| anyhow!("Not a delete-user command"))?;

    let managers = store.managers();
    managers.users.delete_user(&sub.name).await?;
    managers.commit().await?;

    eprintln!("Deleted user {}", sub.name);

    Ok(())
}
