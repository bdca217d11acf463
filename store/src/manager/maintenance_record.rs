//! Maintenance records.

use std::sync::Arc;

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use super::{id_key, DroneManager, MaintainerManager};
use crate::context::Context;
use crate::database::entity::maintenance_record::{
    self, Entity as MaintenanceRecord, MaintenanceRecordModel, RecordType,
};
use crate::error::{EntityKind, StoreError, StoreResult};
use skylog::normalize;

const KIND: EntityKind = EntityKind::MaintenanceRecord;

/// Fields of a maintenance record to add or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMaintenanceRecord {
    pub maintainer_id: i64,
    pub drone_id: i64,
    pub date_completed: NaiveDateTime,
    pub record_type: RecordType,
    pub description: String,
    pub notes: Option<String>,
}

/// Conditions for [`MaintenanceRecordManager::find_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceFilter {
    pub maintainer_id: Option<i64>,
    pub drone_id: Option<i64>,

    /// Only records completed at or after this time.
    pub from: Option<NaiveDateTime>,

    /// Only records completed at or before this time.
    pub to: Option<NaiveDateTime>,
}

pub struct MaintenanceRecordManager {
    context: Arc<Context>,
    maintainers: Arc<MaintainerManager>,
    drones: Arc<DroneManager>,
}

impl NewMaintenanceRecord {
    fn cleaned(self) -> Self {
        Self {
            description: normalize::clean(&self.description),
            notes: self
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_owned),
            ..self
        }
    }
}

impl MaintenanceRecordManager {
    pub fn new(
        context: Arc<Context>,
        maintainers: Arc<MaintainerManager>,
        drones: Arc<DroneManager>,
    ) -> Self {
        Self {
            context,
            maintainers,
            drones,
        }
    }

    pub async fn get(&self, id: i64) -> StoreResult<MaintenanceRecordModel> {
        let db = self.context.staged().await?;

        MaintenanceRecord::find_by_id(id)
            .one(&*db)
            .await?
            .ok_or_else(|| StoreError::not_found(KIND, id_key(id)))
    }

    /// Returns the records matching all conditions of a filter, oldest first.
    pub async fn find_records(
        &self,
        filter: &MaintenanceFilter,
    ) -> StoreResult<Vec<MaintenanceRecordModel>> {
        let mut query = MaintenanceRecord::find();

        if let Some(maintainer_id) = filter.maintainer_id {
            query = query.filter(maintenance_record::Column::MaintainerId.eq(maintainer_id));
        }

        if let Some(drone_id) = filter.drone_id {
            query = query.filter(maintenance_record::Column::DroneId.eq(drone_id));
        }

        if let Some(from) = filter.from {
            query = query.filter(maintenance_record::Column::DateCompleted.gte(from));
        }

        if let Some(to) = filter.to {
            query = query.filter(maintenance_record::Column::DateCompleted.lte(to));
        }

        let db = self.context.staged().await?;
        let records = query
            .order_by_asc(maintenance_record::Column::DateCompleted)
            .order_by_asc(maintenance_record::Column::Id)
            .all(&*db)
            .await?;

        Ok(records)
    }

    /// Returns all records, optionally only those of one drone, oldest first.
    pub async fn list(&self, drone_id: Option<i64>) -> StoreResult<Vec<MaintenanceRecordModel>> {
        let filter = MaintenanceFilter {
            drone_id,
            ..Default::default()
        };

        self.find_records(&filter).await
    }

    pub async fn add(&self, record: NewMaintenanceRecord) -> StoreResult<MaintenanceRecordModel> {
        self.check_references(&record).await?;

        let record = record.cleaned();
        let db = self.context.staged().await?;
        let model = maintenance_record::ActiveModel {
            maintainer_id: Set(record.maintainer_id),
            drone_id: Set(record.drone_id),
            date_completed: Set(record.date_completed),
            record_type: Set(record.record_type),
            description: Set(record.description),
            notes: Set(record.notes),
            ..Default::default()
        }
        .insert(&*db)
        .await?;

        tracing::debug!("Staged maintenance record {}", model.id);

        Ok(model)
    }

    pub async fn update(
        &self,
        id: i64,
        record: NewMaintenanceRecord,
    ) -> StoreResult<MaintenanceRecordModel> {
        self.check_references(&record).await?;

        let record = record.cleaned();
        let mut model: maintenance_record::ActiveModel = self.get(id).await?.into();
        model.maintainer_id = Set(record.maintainer_id);
        model.drone_id = Set(record.drone_id);
        model.date_completed = Set(record.date_completed);
        model.record_type = Set(record.record_type);
        model.description = Set(record.description);
        model.notes = Set(record.notes);

        let db = self.context.staged().await?;
        let model = model.update(&*db).await?;

        Ok(model)
    }

    async fn check_references(&self, record: &NewMaintenanceRecord) -> StoreResult<()> {
        self.maintainers.get(record.maintainer_id).await?;
        self.drones.get(record.drone_id).await?;

        Ok(())
    }
}
