use sea_orm_migration::prelude::*;

use crate::database::entity::drone;
use crate::database::entity::flight::*;
use crate::database::entity::location;
use crate::database::entity::operator;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_000007_create_flight_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Column::DroneId).big_integer().not_null())
                    .col(ColumnDef::new(Column::LocationId).big_integer().not_null())
                    .col(ColumnDef::new(Column::OperatorId).big_integer().not_null())
                    .col(ColumnDef::new(Column::Start).timestamp().not_null())
                    .col(ColumnDef::new(Column::End).timestamp().not_null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_flight_drone")
                            .from_tbl(Entity)
                            .from_col(Column::DroneId)
                            .to_tbl(drone::Entity)
                            .to_col(drone::Column::Id),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_flight_location")
                            .from_tbl(Entity)
                            .from_col(Column::LocationId)
                            .to_tbl(location::Entity)
                            .to_col(location::Column::Id),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_flight_operator")
                            .from_tbl(Entity)
                            .from_col(Column::OperatorId)
                            .to_tbl(operator::Entity)
                            .to_col(operator::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-flight-start")
                    .table(Entity)
                    .col(Column::Start)
                    .to_owned(),
            )
            .await
    }
}
