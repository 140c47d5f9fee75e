//! Create `planet` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 250).unique_key())
                    .col(string_len_null(Planet::Climate, 128))
                    .col(string_len_null(Planet::Terrain, 128))
                    .col(string_len_null(Planet::Gravity, 64))
                    .col(integer_null(Planet::Diameter))
                    .col(big_integer_null(Planet::Population))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Planet::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Planet { Table, Id, Name, Climate, Terrain, Gravity, Diameter, Population }
