use anyhow::{anyhow, Result};
use clap::Parser;

use crate::Opts;
use skylog::property::PropertyType;
use skylog_store::Store;

/// Define a flight property.
///
/// For example, to record wind speed once per flight:
///
/// $ skylogadm add-property WindSpeed --type number --single
#[derive(Debug, Parser)]
pub struct AddProperty {
    /// Name of the property.
    ///
    /// Import files with a column of this name fill the property.
    name: String,

    /// Type of the values.
    ///
    /// One of "date", "number" and "string".
    #[clap(long = "type", value_name = "TYPE")]
    data_type: PropertyType,

    /// Allow at most one value per flight.
    #[clap(long)]
    single: bool,
}

/// List flight properties.
#[derive(Debug, Parser)]
pub struct ListProperties {}

pub async fn add(store: Store, opts: Opts) -> Result<()> {
    let sub = opts
        .command
        .as_add_property()
        .ok_or_else(|| anyhow!("Not an add-property command"))?;

    let managers = store.managers();
    let property = managers
        .properties
        .add_property(&sub.name, sub.data_type, sub.single)
        .await?;
    managers.commit().await?;

    eprintln!("Added property {} ({})", property.name, sub.data_type);

    Ok(())
}

pub async fn list(store: Store) -> Result<()> {
    let managers = store.managers();

    for property in managers.properties.list_properties().await? {
        let instances = if property.is_single_instance {
            "single"
        } else {
            "multiple"
        };

        println!(
            "{}\t{}\t{}",
            property.name,
            property.property_type(),
            instances
        );
    }

    Ok(())
}
