//! Test fixtures.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ConnectOptions, Database};

use crate::database::entity::drone::DroneModel;
use crate::database::entity::flight::FlightModel;
use crate::database::entity::location::LocationModel;
use crate::database::entity::operator::OperatorModel;
use crate::manager::{Managers, NewAddress, NewFlight, NewOperator};
use crate::Store;

/// Returns a migrated store backed by a private in-memory database.
pub async fn memory_store() -> Store {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let database = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");

    let store = Store::new(database);
    store
        .run_migrations()
        .await
        .expect("Failed to run migrations");

    store
}

/// Returns the managers of a fresh in-memory store.
pub async fn managers() -> Managers {
    memory_store().await.managers()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("Invalid test timestamp")
}

pub fn address(number: &str, postcode: &str) -> NewAddress {
    NewAddress {
        number: number.to_string(),
        street: "Runway Road".to_string(),
        town: "Aerodrome".to_string(),
        county: "Shire".to_string(),
        postcode: postcode.to_string(),
        country: "United Kingdom".to_string(),
    }
}

/// Records that every flight needs.
pub struct Fleet {
    pub drone: DroneModel,
    pub location: LocationModel,
    pub operator: OperatorModel,
}

/// Adds a drone, a location and an operator.
pub async fn fleet(managers: &Managers) -> Fleet {
    let manufacturer = managers.manufacturers.add("DJI").await.unwrap();
    let model = managers
        .models
        .add("Mavic 3", manufacturer.id)
        .await
        .unwrap();
    let drone = managers
        .drones
        .add("Survey One", "SN-0001", model.id)
        .await
        .unwrap();
    let location = managers.locations.add("Brighton Beach").await.unwrap();
    let address = managers.addresses.add(address("1", "BN1 1AA")).await.unwrap();
    let operator = managers
        .operators
        .add(NewOperator {
            first_names: "Amelia".to_string(),
            surname: "Earhart".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 7, 24).unwrap(),
            flyer_number: "GBR-RP-123456789".to_string(),
            operator_number: "GBR-OP-0001".to_string(),
            address_id: address.id,
        })
        .await
        .unwrap();

    Fleet {
        drone,
        location,
        operator,
    }
}

pub fn new_flight(fleet: &Fleet, start: NaiveDateTime, end: NaiveDateTime) -> NewFlight {
    NewFlight {
        operator_id: fleet.operator.id,
        drone_id: fleet.drone.id,
        location_id: fleet.location.id,
        start,
        end,
    }
}

pub async fn flight(managers: &Managers, fleet: &Fleet) -> FlightModel {
    managers
        .flights
        .add(new_flight(
            fleet,
            at(2024, 3, 1, 10, 0),
            at(2024, 3, 1, 10, 30),
        ))
        .await
        .unwrap()
}
