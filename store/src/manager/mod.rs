//! Domain managers.
//!
//! There is one manager per entity. A manager checks the invariants of
//! its entity (parent records exist, natural keys are unique) before
//! staging a write in the shared [`Context`]. Nothing is durable until
//! the context is committed.
//!
//! Managers that validate references to other entities hold the sibling
//! managers they need. [`Managers`] builds them leaves first.

pub mod address;
pub mod drone;
pub mod drone_model;
pub mod flight;
pub mod flight_property;
pub mod location;
pub mod maintainer;
pub mod maintenance_record;
pub mod manufacturer;
pub mod operator;
mod password;
pub mod user;

#[cfg(test)]
mod tests;

use std::fmt::Display;
use std::sync::Arc;

use crate::context::Context;
use crate::error::StoreResult;

pub use address::{AddressManager, NewAddress};
pub use drone::DroneManager;
pub use drone_model::ModelManager;
pub use flight::{FlightFilter, FlightManager, NewFlight};
pub use flight_property::{FlightPropertyManager, FlightPropertyValue};
pub use location::LocationManager;
pub use maintainer::MaintainerManager;
pub use maintenance_record::{MaintenanceFilter, MaintenanceRecordManager, NewMaintenanceRecord};
pub use manufacturer::ManufacturerManager;
pub use operator::{NewOperator, OperatorManager};
pub use user::UserManager;

/// All managers bound to one context.
#[derive(Clone)]
pub struct Managers {
    pub context: Arc<Context>,

    pub addresses: Arc<AddressManager>,
    pub manufacturers: Arc<ManufacturerManager>,
    pub locations: Arc<LocationManager>,
    pub properties: Arc<FlightPropertyManager>,
    pub maintainers: Arc<MaintainerManager>,
    pub users: Arc<UserManager>,

    pub models: Arc<ModelManager>,
    pub drones: Arc<DroneManager>,
    pub operators: Arc<OperatorManager>,

    pub flights: Arc<FlightManager>,
    pub maintenance_records: Arc<MaintenanceRecordManager>,
}

impl Managers {
    pub fn new(context: Arc<Context>) -> Self {
        let addresses = Arc::new(AddressManager::new(context.clone()));
        let manufacturers = Arc::new(ManufacturerManager::new(context.clone()));
        let locations = Arc::new(LocationManager::new(context.clone()));
        let properties = Arc::new(FlightPropertyManager::new(context.clone()));
        let maintainers = Arc::new(MaintainerManager::new(context.clone()));
        let users = Arc::new(UserManager::new(context.clone()));

        let models = Arc::new(ModelManager::new(context.clone(), manufacturers.clone()));
        let drones = Arc::new(DroneManager::new(context.clone(), models.clone()));
        let operators = Arc::new(OperatorManager::new(context.clone(), addresses.clone()));

        let flights = Arc::new(FlightManager::new(
            context.clone(),
            operators.clone(),
            drones.clone(),
            locations.clone(),
        ));
        let maintenance_records = Arc::new(MaintenanceRecordManager::new(
            context.clone(),
            maintainers.clone(),
            drones.clone(),
        ));

        Self {
            context,
            addresses,
            manufacturers,
            locations,
            properties,
            maintainers,
            users,
            models,
            drones,
            operators,
            flights,
            maintenance_records,
        }
    }

    /// Persists all changes staged through these managers.
    pub async fn commit(&self) -> StoreResult<()> {
        self.context.commit().await
    }

    /// Discards all changes staged through these managers.
    pub async fn rollback(&self) -> StoreResult<()> {
        self.context.rollback().await
    }
}

/// Formats a record ID for error messages.
pub(crate) fn id_key(id: i64) -> String {
    format!("#{}", id)
}

/// Formats the cleaned fields of a natural key for error messages.
pub(crate) fn display_key<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Display,
{
    let parts: Vec<String> = parts.into_iter().map(|p| p.to_string()).collect();
    format!("\"{}\"", parts.join(", "))
}
