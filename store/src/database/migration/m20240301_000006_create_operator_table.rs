use sea_orm_migration::prelude::*;

use crate::database::entity::address;
use crate::database::entity::operator::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_000006_create_operator_table"
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
                    .col(ColumnDef::new(Column::FirstNames).string().not_null())
                    .col(ColumnDef::new(Column::Surname).string().not_null())
                    .col(ColumnDef::new(Column::DateOfBirth).date().not_null())
                    .col(
                        ColumnDef::new(Column::FlyerNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Column::OperatorNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Column::AddressId).big_integer().not_null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_operator_address")
                            .from_tbl(Entity)
                            .from_col(Column::AddressId)
                            .to_tbl(address::Entity)
                            .to_col(address::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-operator-natural-key")
                    .table(Entity)
                    .col(Column::NaturalKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-operator-operator-number")
                    .table(Entity)
                    .col(Column::OperatorNumber)
                    .to_owned(),
            )
            .await
    }
}
