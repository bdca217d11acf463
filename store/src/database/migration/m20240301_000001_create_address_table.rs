use sea_orm_migration::prelude::*;

use crate::database::entity::address::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_000001_create_address_table"
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
                    .col(ColumnDef::new(Column::Number).string().not_null())
                    .col(ColumnDef::new(Column::Street).string().not_null())
                    .col(ColumnDef::new(Column::Town).string().not_null())
                    .col(ColumnDef::new(Column::County).string().not_null())
                    .col(ColumnDef::new(Column::Postcode).string().not_null())
                    .col(ColumnDef::new(Column::Country).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-address-natural-key")
                    .table(Entity)
                    .col(Column::NaturalKey)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}
