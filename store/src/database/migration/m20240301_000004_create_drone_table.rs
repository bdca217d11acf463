use sea_orm_migration::prelude::*;

use crate::database::entity::drone::*;
use crate::database::entity::drone_model;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_000004_create_drone_table"
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
                    .col(ColumnDef::new(Column::NaturalKey).string().not_null())
                    .col(ColumnDef::new(Column::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Column::SerialNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Column::ModelId).big_integer().not_null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_drone_model")
                            .from_tbl(Entity)
                            .from_col(Column::ModelId)
                            .to_tbl(drone_model::Entity)
                            .to_col(drone_model::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-drone-natural-key")
                    .table(Entity)
                    .col(Column::NaturalKey)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}
