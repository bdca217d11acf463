use sea_orm_migration::prelude::*;

use crate::database::entity::drone;
use crate::database::entity::maintainer;
use crate::database::entity::maintenance_record;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_000009_create_maintenance_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(maintainer::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(maintainer::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(maintainer::Column::NaturalKey)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(maintainer::Column::FirstNames)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(maintainer::Column::Surname).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-maintainer-natural-key")
                    .table(maintainer::Entity)
                    .col(maintainer::Column::NaturalKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(maintenance_record::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(maintenance_record::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(maintenance_record::Column::MaintainerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(maintenance_record::Column::DroneId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(maintenance_record::Column::DateCompleted)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(maintenance_record::Column::RecordType)
                            .string_len(1)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(maintenance_record::Column::Description)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(maintenance_record::Column::Notes)
                            .text()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_maintenance_record_maintainer")
                            .from_tbl(maintenance_record::Entity)
                            .from_col(maintenance_record::Column::MaintainerId)
                            .to_tbl(maintainer::Entity)
                            .to_col(maintainer::Column::Id),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_maintenance_record_drone")
                            .from_tbl(maintenance_record::Entity)
                            .from_col(maintenance_record::Column::DroneId)
                            .to_tbl(drone::Entity)
                            .to_col(drone::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-maintenance-record-date-completed")
                    .table(maintenance_record::Entity)
                    .col(maintenance_record::Column::DateCompleted)
                    .to_owned(),
            )
            .await
    }
}
