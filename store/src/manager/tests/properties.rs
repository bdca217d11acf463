use super::*;

use skylog::property::{PropertyType, PropertyValue};

use crate::error::{EntityKind, StoreError};
use crate::testing::{self, at};

#[tokio::test]
async fn test_property_names_are_case_sensitive() {
    let managers = testing::managers().await;

    managers
        .properties
        .add_property("WindSpeed", PropertyType::Number, true)
        .await
        .unwrap();

    let err = managers
        .properties
        .add_property("WindSpeed", PropertyType::String, false)
        .await
        .unwrap_err();
    assert!(err.is_exists(EntityKind::FlightProperty));

    managers
        .properties
        .add_property("windspeed", PropertyType::Number, false)
        .await
        .expect("Names differing in case are distinct properties");

    assert!(managers
        .properties
        .find_property("WINDSPEED")
        .await
        .unwrap()
        .is_none());
    assert_eq!(2, managers.properties.list_properties().await.unwrap().len());
}

#[tokio::test]
async fn test_single_instance() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;
    let flight = testing::flight(&managers, &fleet).await;

    let wind = managers
        .properties
        .add_property("WindSpeed", PropertyType::Number, true)
        .await
        .unwrap();

    managers
        .properties
        .add_property_value(flight.id, wind.id, PropertyValue::Number(12.5))
        .await
        .unwrap();

    let err = managers
        .properties
        .add_property_value(flight.id, wind.id, PropertyValue::Number(13.0))
        .await
        .unwrap_err();
    assert!(
        matches!(err, StoreError::ValueExists { flight_id, .. } if flight_id == flight.id),
        "{}",
        err
    );
}

#[tokio::test]
async fn test_multi_instance() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;
    let flight = testing::flight(&managers, &fleet).await;

    let note = managers
        .properties
        .add_property("Note", PropertyType::String, false)
        .await
        .unwrap();

    for text in ["Gusty", "Birds nearby"] {
        managers
            .properties
            .add_property_value(flight.id, note.id, PropertyValue::String(text.to_string()))
            .await
            .unwrap();
    }

    let values = managers
        .properties
        .get_property_values(flight.id)
        .await
        .unwrap();
    let texts: Vec<PropertyValue> = values.iter().filter_map(|v| v.value.value()).collect();

    assert_eq!(
        vec![
            PropertyValue::String("Gusty".to_string()),
            PropertyValue::String("Birds nearby".to_string()),
        ],
        texts
    );
    assert!(values.iter().all(|v| v.property == note));
}

#[tokio::test]
async fn test_date_value() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;
    let flight = testing::flight(&managers, &fleet).await;

    let inspected = managers
        .properties
        .add_property("Inspected", PropertyType::Date, true)
        .await
        .unwrap();

    let when = at(2024, 2, 29, 16, 45);
    managers
        .properties
        .add_property_value(flight.id, inspected.id, PropertyValue::Date(when))
        .await
        .unwrap();

    let values = managers
        .properties
        .get_property_values(flight.id)
        .await
        .unwrap();
    assert_eq!(1, values.len());

    let stored = &values[0].value;
    assert_eq!(Some(when), stored.date_value);
    assert_eq!(None, stored.number_value);
    assert_eq!(None, stored.string_value);
    assert_eq!(inspected, values[0].property);
}

#[tokio::test]
async fn test_type_mismatch() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;
    let flight = testing::flight(&managers, &fleet).await;

    let wind = managers
        .properties
        .add_property("WindSpeed", PropertyType::Number, false)
        .await
        .unwrap();

    let err = managers
        .properties
        .add_property_value(flight.id, wind.id, PropertyValue::String("fast".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::PropertyTypeMismatch {
            expected: PropertyType::Number,
            actual: PropertyType::String,
            ..
        }
    ));
    assert!(managers
        .properties
        .get_property_values(flight.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_update_value() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;
    let flight = testing::flight(&managers, &fleet).await;

    let wind = managers
        .properties
        .add_property("WindSpeed", PropertyType::Number, true)
        .await
        .unwrap();
    let value = managers
        .properties
        .add_property_value(flight.id, wind.id, PropertyValue::Number(4.0))
        .await
        .unwrap();

    let updated = managers
        .properties
        .update_property_value(value.id, PropertyValue::Number(6.5))
        .await
        .unwrap();
    assert_eq!(Some(PropertyValue::Number(6.5)), updated.value());
    assert_eq!(
        updated,
        managers
            .properties
            .get_property_value(value.id)
            .await
            .unwrap()
    );

    let err = managers
        .properties
        .update_property_value(value.id, PropertyValue::Date(at(2024, 1, 1, 0, 0)))
        .await
        .unwrap_err();
    assert_eq!("PropertyTypeMismatch", err.name());

    let err = managers
        .properties
        .update_property_value(value.id + 1, PropertyValue::Number(1.0))
        .await
        .unwrap_err();
    assert!(err.is_not_found(EntityKind::FlightPropertyValue));
}

#[tokio::test]
async fn test_value_for_missing_property() {
    let managers = testing::managers().await;

    let err = managers
        .properties
        .add_property_value(1, 1, PropertyValue::Number(1.0))
        .await
        .unwrap_err();
    assert!(err.is_not_found(EntityKind::FlightProperty));
}
