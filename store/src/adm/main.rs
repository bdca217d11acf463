mod command;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use enum_as_inner::EnumAsInner;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use command::property::{self, AddProperty, ListProperties};
use command::user::{self, AddUser, DeleteUser, SetPassword};
use skylog_store::config;
use skylog_store::Store;

/// Skylog administration utilities.
#[derive(Debug, Parser)]
#[clap(version)]
#[clap(propagate_version = true)]
pub struct Opts {
    /// Path to the config file.
    #[clap(short = 'f', long)]
    config: Option<PathBuf>,

    /// The sub-command.
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, EnumAsInner)]
pub enum Command {
    AddUser(AddUser),
    SetPassword(SetPassword),
    DeleteUser(DeleteUser),
    AddProperty(AddProperty),
    ListProperties(ListProperties),

    /// Run the database migrations then exit.
    DbMigrations,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    init_logging();

    let config = config::load_config(opts.config.as_deref())?;
    let store = Store::connect(&config.database.url).await?;

    match opts.command {
        Command::AddUser(_) => user::add(store, opts).await?,
        Command::SetPassword(_) => user::set_password(store, opts).await?,
        Command::DeleteUser(_) => user::delete(store, opts).await?,
        Command::AddProperty(_) => property::add(store, opts).await?,
        Command::ListProperties(_) => property::list(store).await?,
        Command::DbMigrations => store.run_migrations().await?,
    }

    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();
}
