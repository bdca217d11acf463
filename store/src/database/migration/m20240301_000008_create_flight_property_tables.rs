use sea_orm_migration::prelude::*;

use crate::database::entity::flight;
use crate::database::entity::flight_property;
use crate::database::entity::flight_property_value;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_000008_create_flight_property_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(flight_property::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(flight_property::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(flight_property::Column::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(flight_property::Column::DataType)
                            .string_len(1)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(flight_property::Column::IsSingleInstance)
                            .boolean()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(flight_property_value::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(flight_property_value::Column::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(flight_property_value::Column::FlightId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(flight_property_value::Column::PropertyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(flight_property_value::Column::DateValue)
                            .timestamp()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(flight_property_value::Column::NumberValue)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(flight_property_value::Column::StringValue)
                            .string()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_flight_property_value_flight")
                            .from_tbl(flight_property_value::Entity)
                            .from_col(flight_property_value::Column::FlightId)
                            .to_tbl(flight::Entity)
                            .to_col(flight::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_flight_property_value_property")
                            .from_tbl(flight_property_value::Entity)
                            .from_col(flight_property_value::Column::PropertyId)
                            .to_tbl(flight_property::Entity)
                            .to_col(flight_property::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-flight-property-value-flight-property")
                    .table(flight_property_value::Entity)
                    .col(flight_property_value::Column::FlightId)
                    .col(flight_property_value::Column::PropertyId)
                    .to_owned(),
            )
            .await
    }
}
