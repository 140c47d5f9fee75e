//! Create `character` table (served as `/people`).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 250).unique_key())
                    .col(string_len_null(Character::Height, 32))
                    .col(string_len_null(Character::Mass, 32))
                    .col(string_len_null(Character::HairColor, 64))
                    .col(string_len_null(Character::EyeColor, 64))
                    .col(string_len_null(Character::BirthYear, 32))
                    .col(string_len_null(Character::Gender, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Character::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Character { Table, Id, Name, Height, Mass, HairColor, EyeColor, BirthYear, Gender }
