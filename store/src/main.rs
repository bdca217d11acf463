use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use skylog_store::config;
use skylog_store::import::FlightImporter;
use skylog_store::Store;

/// Imports flights from a CSV file.
#[derive(Debug, Parser)]
#[clap(version)]
#[clap(propagate_version = true)]
struct Opts {
    /// Path to the config file.
    #[clap(short = 'f', long)]
    config: Option<PathBuf>,

    /// The CSV file to import.
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    init_logging();

    let config = config::load_config(opts.config.as_deref())?;
    let store = Store::connect(&config.database.url).await?;
    let managers = store.managers();

    let mut importer = FlightImporter::new(&managers, config.import);
    match importer.import_file(&opts.file).await {
        Ok(count) => {
            eprintln!("Imported {} flights from {:?}", count, opts.file);
            Ok(())
        }
        Err(e) => {
            match importer.last_error() {
                Some(failure) => eprintln!("Record {} : {}", failure.row, failure.message),
                None => eprintln!("Import of {:?} failed: {}", opts.file, e),
            }

            process::exit(1);
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let error_layer = ErrorLayer::default();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(error_layer)
        .init();
}
