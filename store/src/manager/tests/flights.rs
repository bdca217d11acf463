use super::*;

use crate::error::EntityKind;
use crate::testing::{self, at, new_flight};

#[tokio::test]
async fn test_paging_past_the_end() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;
    let flight = testing::flight(&managers, &fleet).await;

    let filter = FlightFilter::default();

    let page = managers.flights.find_flights(&filter, 1, 2).await.unwrap();
    assert_eq!(vec![flight], page);

    let page = managers.flights.find_flights(&filter, 2, 2).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_paging() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;

    let mut ids = Vec::new();
    for day in 1..=5 {
        let flight = managers
            .flights
            .add(new_flight(&fleet, at(2024, 4, day, 9, 0), at(2024, 4, day, 9, 45)))
            .await
            .unwrap();
        ids.push(flight.id);
    }

    let filter = FlightFilter::default();
    let mut pages = Vec::new();
    for number in 1..=4 {
        let page: Vec<i64> = managers
            .flights
            .find_flights(&filter, number, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.id)
            .collect();
        pages.push(page);
    }

    assert_eq!(
        vec![
            ids[0..2].to_vec(),
            ids[2..4].to_vec(),
            ids[4..5].to_vec(),
            Vec::new(),
        ],
        pages
    );
}

#[tokio::test]
async fn test_filters() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;
    let other_location = managers.locations.add("Box Hill").await.unwrap();

    let morning = managers
        .flights
        .add(new_flight(&fleet, at(2024, 4, 1, 9, 0), at(2024, 4, 1, 9, 30)))
        .await
        .unwrap();

    let mut elsewhere = new_flight(&fleet, at(2024, 4, 1, 14, 0), at(2024, 4, 1, 15, 0));
    elsewhere.location_id = other_location.id;
    let afternoon = managers.flights.add(elsewhere).await.unwrap();

    // Identical flights are allowed.
    managers
        .flights
        .add(new_flight(&fleet, at(2024, 4, 1, 9, 0), at(2024, 4, 1, 9, 30)))
        .await
        .unwrap();

    let filter = FlightFilter {
        location_id: Some(other_location.id),
        ..Default::default()
    };
    assert_eq!(
        vec![afternoon.clone()],
        managers.flights.find_flights(&filter, 1, 10).await.unwrap()
    );

    let filter = FlightFilter {
        start: Some(at(2024, 4, 1, 12, 0)),
        ..Default::default()
    };
    assert_eq!(
        vec![afternoon],
        managers.flights.find_flights(&filter, 1, 10).await.unwrap()
    );

    let filter = FlightFilter {
        operator_id: Some(fleet.operator.id),
        drone_id: Some(fleet.drone.id),
        end: Some(at(2024, 4, 1, 10, 0)),
        ..Default::default()
    };
    let found = managers.flights.find_flights(&filter, 1, 10).await.unwrap();
    assert_eq!(2, found.len());
    assert_eq!(morning, found[0]);

    assert_eq!(
        3,
        managers
            .flights
            .list(Some(fleet.operator.id))
            .await
            .unwrap()
            .len()
    );
    assert!(managers
        .flights
        .list(Some(fleet.operator.id + 1))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_reference_order() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;

    let mut flight = new_flight(&fleet, at(2024, 4, 1, 9, 0), at(2024, 4, 1, 9, 30));
    flight.operator_id += 100;
    flight.drone_id += 100;
    flight.location_id += 100;

    let err = managers.flights.add(flight.clone()).await.unwrap_err();
    assert!(err.is_not_found(EntityKind::Operator), "{}", err);

    flight.operator_id = fleet.operator.id;
    let err = managers.flights.add(flight.clone()).await.unwrap_err();
    assert!(err.is_not_found(EntityKind::Drone), "{}", err);

    flight.drone_id = fleet.drone.id;
    let err = managers.flights.add(flight.clone()).await.unwrap_err();
    assert!(err.is_not_found(EntityKind::Location), "{}", err);

    flight.location_id = fleet.location.id;
    managers.flights.add(flight).await.unwrap();
}

#[tokio::test]
async fn test_update_flight() {
    let managers = testing::managers().await;
    let fleet = testing::fleet(&managers).await;
    let flight = testing::flight(&managers, &fleet).await;

    let moved = new_flight(&fleet, at(2024, 6, 2, 7, 15), at(2024, 6, 2, 8, 0));
    let updated = managers.flights.update(flight.id, moved).await.unwrap();

    assert_eq!(flight.id, updated.id);
    assert_eq!(at(2024, 6, 2, 7, 15), updated.start);
    assert_eq!(updated, managers.flights.get(flight.id).await.unwrap());

    let err = managers
        .flights
        .update(flight.id + 1, new_flight(&fleet, at(2024, 6, 2, 7, 15), at(2024, 6, 2, 8, 0)))
        .await
        .unwrap_err();
    assert!(err.is_not_found(EntityKind::Flight));
}
