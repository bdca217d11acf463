use super::*;

use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;
use sea_orm::ActiveModelTrait;

use crate::database::entity::location;
use crate::database::entity::maintenance_record::RecordType;
use crate::error::{EntityKind, StoreError};
use crate::testing::{self, address};

#[tokio::test]
async fn test_address_duplicate_any_casing() {
    let managers = testing::managers().await;

    managers
        .addresses
        .add(address("12a", "BN1 1AA"))
        .await
        .expect("First address should be added");

    let mut shouting = address("12A", "bn1  1aa ");
    shouting.country = "UNITED KINGDOM".to_string();
    let err = managers.addresses.add(shouting).await.unwrap_err();
    assert!(err.is_exists(EntityKind::Address), "{}", err);

    managers
        .addresses
        .add(address("12a", "BN2 2BB"))
        .await
        .expect("Different postcode should be added");

    assert_eq!(2, managers.addresses.list().await.unwrap().len());
}

#[tokio::test]
async fn test_get_returns_normalized_fields() {
    let managers = testing::managers().await;

    let mut new = address("  7 ", "SW1A   1AA");
    new.street = " Downing   Street ".to_string();
    let added = managers.addresses.add(new).await.unwrap();
    let fetched = managers.addresses.get(added.id).await.unwrap();

    assert_eq!(added, fetched);
    assert_eq!("7", fetched.number);
    assert_eq!("Downing Street", fetched.street);
    assert_eq!("SW1A 1AA", fetched.postcode);

    let found = managers
        .addresses
        .find("7", "sw1a 1aa", "united kingdom")
        .await
        .unwrap();
    assert_eq!(Some(fetched), found);
}

#[tokio::test]
async fn test_get_never_assigned() {
    let managers = testing::managers().await;

    let err = managers.addresses.get(42).await.unwrap_err();
    assert!(err.is_not_found(EntityKind::Address));
    assert_eq!("Address #42 does not exist.", err.to_string());

    assert!(managers
        .manufacturers
        .get(1)
        .await
        .unwrap_err()
        .is_not_found(EntityKind::Manufacturer));
    assert!(managers
        .locations
        .get(1)
        .await
        .unwrap_err()
        .is_not_found(EntityKind::Location));
    assert!(managers
        .flights
        .get(1)
        .await
        .unwrap_err()
        .is_not_found(EntityKind::Flight));
    assert!(managers
        .maintenance_records
        .get(1)
        .await
        .unwrap_err()
        .is_not_found(EntityKind::MaintenanceRecord));
}

#[tokio::test]
async fn test_find_absent() {
    let managers = testing::managers().await;

    assert_eq!(None, managers.manufacturers.find("DJI").await.unwrap());
    assert_eq!(None, managers.locations.find("Nowhere").await.unwrap());
    assert_eq!(None, managers.drones.find("SN-0001", 1).await.unwrap());
}

#[tokio::test]
async fn test_manufacturer_and_location_names() {
    let managers = testing::managers().await;

    let dji = managers.manufacturers.add("DJI").await.unwrap();
    let err = managers.manufacturers.add(" dji ").await.unwrap_err();
    assert!(err.is_exists(EntityKind::Manufacturer));

    let parrot = managers.manufacturers.add("Parrot").await.unwrap();
    let err = managers
        .manufacturers
        .update(parrot.id, "Dji")
        .await
        .unwrap_err();
    assert!(err.is_exists(EntityKind::Manufacturer));

    let renamed = managers
        .manufacturers
        .update(dji.id, "DJI Technology")
        .await
        .unwrap();
    assert_eq!("DJI Technology", renamed.name);

    let names: Vec<String> = managers
        .manufacturers
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(vec!["DJI Technology", "Parrot"], names);

    managers.locations.add("Brighton Beach").await.unwrap();
    let err = managers.locations.add("BRIGHTON BEACH").await.unwrap_err();
    assert!(err.is_exists(EntityKind::Location));
}

#[tokio::test]
async fn test_non_ascii_names_ignore_case() {
    let managers = testing::managers().await;

    let oland = managers.locations.add("ÖLAND").await.unwrap();
    managers.commit().await.unwrap();

    let found = managers.locations.find("ÖLAND").await.unwrap();
    assert_eq!(Some(oland.id), found.map(|l| l.id));
    let found = managers.locations.find("öland").await.unwrap();
    assert_eq!(Some(oland.id), found.map(|l| l.id));

    let err = managers.locations.add("öland").await.unwrap_err();
    assert!(err.is_exists(EntityKind::Location), "{}", err);

    managers.manufacturers.add("Ülker Aero").await.unwrap();
    let err = managers.manufacturers.add("ÜLKER AERO").await.unwrap_err();
    assert!(err.is_exists(EntityKind::Manufacturer), "{}", err);

    managers.maintainers.add("Zoë", "Ørsted").await.unwrap();
    let err = managers.maintainers.add("ZOË", "øRSTED").await.unwrap_err();
    assert!(err.is_exists(EntityKind::Maintainer), "{}", err);

    let mut new = address("Élan House", "75001");
    new.country = "FRANCE".to_string();
    managers.addresses.add(new).await.unwrap();
    let mut new = address("élan house", "75001");
    new.country = "france".to_string();
    let err = managers.addresses.add(new).await.unwrap_err();
    assert!(err.is_exists(EntityKind::Address), "{}", err);
}

#[tokio::test]
async fn test_natural_key_is_unique_in_store() {
    let managers = testing::managers().await;

    managers.locations.add("Ærø").await.unwrap();

    let db = managers.context.staged().await.unwrap();
    let result = location::ActiveModel {
        natural_key: Set("ærø".to_string()),
        name: Set("ÆRØ".to_string()),
        ..Default::default()
    }
    .insert(&*db)
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_update_with_unchanged_key() {
    let managers = testing::managers().await;

    let added = managers.addresses.add(address("1", "BN1 1AA")).await.unwrap();

    let mut same = address("1", "BN1 1AA");
    same.street = "Taxiway Lane".to_string();
    let updated = managers.addresses.update(added.id, same).await.unwrap();

    assert_eq!(added.id, updated.id);
    assert_eq!("Taxiway Lane", updated.street);

    let location = managers.locations.add("Field").await.unwrap();
    let updated = managers.locations.update(location.id, "field").await.unwrap();
    assert_eq!("field", updated.name);
}

#[tokio::test]
async fn test_update_missing_target() {
    let managers = testing::managers().await;

    let err = managers
        .addresses
        .update(99, address("1", "BN1 1AA"))
        .await
        .unwrap_err();
    assert!(err.is_not_found(EntityKind::Address));
}

#[tokio::test]
async fn test_model_requires_manufacturer() {
    let managers = testing::managers().await;

    let err = managers.models.add("Mavic 3", 7).await.unwrap_err();
    assert!(err.is_not_found(EntityKind::Manufacturer));

    let dji = managers.manufacturers.add("DJI").await.unwrap();
    let parrot = managers.manufacturers.add("Parrot").await.unwrap();
    managers.models.add("Mavic 3", dji.id).await.unwrap();
    managers.models.add("Mavic 3", parrot.id).await.unwrap();

    let err = managers.models.add("mavic 3", dji.id).await.unwrap_err();
    assert!(err.is_exists(EntityKind::Model));

    assert_eq!(1, managers.models.list(Some(dji.id)).await.unwrap().len());
    assert_eq!(2, managers.models.list(None).await.unwrap().len());
}

#[tokio::test]
async fn test_drone_parent_checked_before_duplicate() {
    let managers = testing::managers().await;

    let dji = managers.manufacturers.add("DJI").await.unwrap();
    let model = managers.models.add("Mavic 3", dji.id).await.unwrap();
    managers
        .drones
        .add("Survey One", "SN-0001", model.id)
        .await
        .unwrap();

    let err = managers
        .drones
        .add("Survey One", "SN-0001", model.id + 100)
        .await
        .unwrap_err();
    assert!(err.is_not_found(EntityKind::Model), "{}", err);

    let err = managers
        .drones
        .add("Another Name", "sn-0001", model.id)
        .await
        .unwrap_err();
    assert!(err.is_exists(EntityKind::Drone), "{}", err);

    let drones = managers.drones.list(Some(model.id)).await.unwrap();
    assert_eq!(1, drones.len());
    assert_eq!("Survey One", drones[0].name);
}

#[tokio::test]
async fn test_operator_address() {
    let managers = testing::managers().await;

    let home = managers.addresses.add(address("1", "BN1 1AA")).await.unwrap();
    let work = managers.addresses.add(address("2", "BN2 2BB")).await.unwrap();

    let new = NewOperator {
        first_names: "Amelia Mary".to_string(),
        surname: "Earhart".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 7, 24).unwrap(),
        flyer_number: "GBR-RP-123456789".to_string(),
        operator_number: "GBR-OP-0001".to_string(),
        address_id: home.id,
    };
    let operator = managers.operators.add(new.clone()).await.unwrap();

    let err = managers.operators.add(new.clone()).await.unwrap_err();
    assert!(err.is_exists(EntityKind::Operator));

    let moved = managers
        .operators
        .set_operator_address(operator.id, work.id)
        .await
        .unwrap();
    assert_eq!(work.id, moved.address_id);
    assert_eq!(moved, managers.operators.get(operator.id).await.unwrap());

    assert!(managers.operators.list(Some(home.id)).await.unwrap().is_empty());
    assert_eq!(1, managers.operators.list(Some(work.id)).await.unwrap().len());

    // Same person at a different address is someone else.
    managers.operators.add(new).await.unwrap();
}

#[tokio::test]
async fn test_set_operator_address_checks_address_first() {
    let managers = testing::managers().await;

    let err = managers
        .operators
        .set_operator_address(1, 2)
        .await
        .unwrap_err();
    assert!(err.is_not_found(EntityKind::Address), "{}", err);

    let home = managers.addresses.add(address("1", "BN1 1AA")).await.unwrap();
    let err = managers
        .operators
        .set_operator_address(1, home.id)
        .await
        .unwrap_err();
    assert!(err.is_not_found(EntityKind::Operator), "{}", err);
}

#[tokio::test]
async fn test_maintenance_records() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;

    let maintainer = managers.maintainers.add("Orville", "Wright").await.unwrap();
    let err = managers.maintainers.add("orville", "WRIGHT").await.unwrap_err();
    assert!(err.is_exists(EntityKind::Maintainer));

    let record = |day: u32, description: &str| NewMaintenanceRecord {
        maintainer_id: maintainer.id,
        drone_id: fleet.drone.id,
        date_completed: testing::at(2024, 5, day, 12, 0),
        record_type: RecordType::Maintenance,
        description: description.to_string(),
        notes: None,
    };

    managers
        .maintenance_records
        .add(record(20, "Replaced propellers"))
        .await
        .unwrap();
    let first = managers
        .maintenance_records
        .add(record(3, "Firmware update"))
        .await
        .unwrap();
    managers
        .maintenance_records
        .add(record(11, "Gimbal calibration"))
        .await
        .unwrap();

    let descriptions: Vec<String> = managers
        .maintenance_records
        .list(Some(fleet.drone.id))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.description)
        .collect();
    assert_eq!(
        vec!["Firmware update", "Gimbal calibration", "Replaced propellers"],
        descriptions
    );

    let filter = MaintenanceFilter {
        from: Some(testing::at(2024, 5, 10, 0, 0)),
        to: Some(testing::at(2024, 5, 15, 0, 0)),
        ..Default::default()
    };
    let found = managers
        .maintenance_records
        .find_records(&filter)
        .await
        .unwrap();
    assert_eq!(1, found.len());
    assert_eq!("Gimbal calibration", found[0].description);

    let mut changed = record(3, "Firmware update");
    changed.record_type = RecordType::Modification;
    changed.notes = Some("  v2.1  ".to_string());
    let updated = managers
        .maintenance_records
        .update(first.id, changed)
        .await
        .unwrap();
    assert_eq!(RecordType::Modification, updated.record_type);
    assert_eq!(Some("v2.1".to_string()), updated.notes);
}

#[tokio::test]
async fn test_maintenance_record_checks_maintainer_first() {
    let managers = testing::managers().await;

    let err = managers
        .maintenance_records
        .add(NewMaintenanceRecord {
            maintainer_id: 5,
            drone_id: 6,
            date_completed: testing::at(2024, 5, 1, 9, 0),
            record_type: RecordType::Maintenance,
            description: "Check".to_string(),
            notes: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::NotFound {
            kind: EntityKind::Maintainer,
            ..
        }
    ));
}
