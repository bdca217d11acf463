use sea_orm_migration::prelude::*;

use crate::database::entity::drone_model::*;
use crate::database::entity::manufacturer;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_000003_create_model_table"
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
                        ColumnDef::new(Column::ManufacturerId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_model_manufacturer")
                            .from_tbl(Entity)
                            .from_col(Column::ManufacturerId)
                            .to_tbl(manufacturer::Entity)
                            .to_col(manufacturer::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-model-natural-key")
                    .table(Entity)
                    .col(Column::NaturalKey)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}
