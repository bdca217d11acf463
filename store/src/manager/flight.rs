//! Flights.

use std::sync::Arc;

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder, QuerySelect};

use super::{id_key, DroneManager, LocationManager, OperatorManager};
use crate::context::Context;
use crate::database::entity::flight::{self, Entity as Flight, FlightModel};
use crate::error::{EntityKind, StoreError, StoreResult};

const KIND: EntityKind = EntityKind::Flight;

/// Fields of a flight to add or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlight {
    pub operator_id: i64,
    pub drone_id: i64,
    pub location_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Conditions for [`FlightManager::find_flights`].
///
/// Unset conditions match every flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightFilter {
    pub operator_id: Option<i64>,
    pub drone_id: Option<i64>,
    pub location_id: Option<i64>,

    /// Only flights starting at or after this time.
    pub start: Option<NaiveDateTime>,

    /// Only flights ending at or before this time.
    pub end: Option<NaiveDateTime>,
}

/// Manages flights.
///
/// Flights have no natural key, so nothing is checked for duplicates.
pub struct FlightManager {
    context: Arc<Context>,
    operators: Arc<OperatorManager>,
    drones: Arc<DroneManager>,
    locations: Arc<LocationManager>,
}

impl FlightManager {
    pub fn new(
        context: Arc<Context>,
        operators: Arc<OperatorManager>,
        drones: Arc<DroneManager>,
        locations: Arc<LocationManager>,
    ) -> Self {
        Self {
            context,
            operators,
            drones,
            locations,
        }
    }

    pub async fn get(&self, id: i64) -> StoreResult<FlightModel> {
        let db = self.context.staged().await?;

        Flight::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Returns all flights, optionally only those of one operator.
    pub async fn list(&self, operator_id: Option<i64>) -> StoreResult<Vec<FlightModel>> {
        let filter = FlightFilter {
            operator_id,
            ..Default::default()
        };

        let db = self.context.staged().await?;
        let flights = filtered(&filter).all(&*db).await?;

        Ok(flights)
    }

    /// Returns one page of the flights matching all conditions of a filter.
    ///
    /// Pages are numbered from 1. A page past the last matching flight
    /// is empty.
    pub async fn find_flights(
        &self,
        filter: &FlightFilter,
        page_number: u64,
        page_size: u64,
    ) -> StoreResult<Vec<FlightModel>> {
        let offset = page_number.saturating_sub(1).saturating_mul(page_size);

        let db = self.context.staged().await?;
        let flights = filtered(filter)
            .offset(offset)
            .limit(page_size)
            .all(&*db)
            .await?;

        Ok(flights)
    }

    pub async fn add(&self, flight: NewFlight) -> StoreResult<FlightModel> {
        self.check_references(&flight).await?;

        let db = self.context.staged().await?;
        let model = flight::ActiveModel {
            drone_id: Set(flight.drone_id),
            location_id: Set(flight.location_id),
            operator_id: Set(flight.operator_id),
            start: Set(flight.start),
            end: Set(flight.end),
            ..Default::default()
        }
        .insert(&*db)
        .await?;

        tracing::debug!("Staged flight {}", model.id);

        Ok(model)
    }

    pub async fn update(&self, id: i64, flight: NewFlight) -> StoreResult<FlightModel> {
        self.check_references(&flight).await?;

        let mut model: flight::ActiveModel = self.get(id).await?.into();
        model.drone_id = Set(flight.drone_id);
        model.location_id = Set(flight.location_id);
        model.operator_id = Set(flight.operator_id);
        model.start = Set(flight.start);
        model.end = Set(flight.end);

        let db = self.context.staged().await?;
        let model = model.update(&*db).await?;

        Ok(model)
    }

    async fn check_references(&self, flight: &NewFlight) -> StoreResult<()> {
        self.operators.get(flight.operator_id).await?;
        self.drones.get(flight.drone_id).await?;
        self.locations.get(flight.location_id).await?;

        Ok(())
    }
}

fn filtered(filter: &FlightFilter) -> Select<Flight> {
    let mut query = Flight::find();

    if let Some(operator_id) = filter.operator_id {
        query = query.filter(flight::Column::OperatorId.eq(operator_id));
    }

    if let Some(drone_id) = filter.drone_id {
        query = query.filter(flight::Column::DroneId.eq(drone_id));
    }

    if let Some(location_id) = filter.location_id {
        query = query.filter(flight::Column::LocationId.eq(location_id));
    }

    if let Some(start) = filter.start {
        query = query.filter(flight::Column::Start.gte(start));
    }

    if let Some(end) = filter.end {
        query = query.filter(flight::Column::End.lte(end));
    }

    // Insertion order, so that pages are stable.
    query.order_by_asc(flight::Column::Id)
}
