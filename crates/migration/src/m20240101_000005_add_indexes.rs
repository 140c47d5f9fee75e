use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Favorite: lookups by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_user")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        // Favorite: one row per (user, character); NULL character ids never collide
        manager
            .create_index(
                Index::create()
                    .name("uniq_favorite_user_character")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Favorite: one row per (user, planet)
        manager
            .create_index(
                Index::create()
                    .name("uniq_favorite_user_planet")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_favorite_user").table(Favorite::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_favorite_user_character").table(Favorite::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_favorite_user_planet").table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Favorite { Table, UserId, CharacterId, PlanetId }
