#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::{character, planet, user};

/// Each test gets its own migrated in-memory database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

pub async fn seed_user(db: &DatabaseConnection, email: &str) -> Result<user::Model, anyhow::Error> {
    Ok(user::create(db, email, "secret").await?)
}

pub async fn seed_planet(db: &DatabaseConnection, name: &str) -> Result<planet::Model, anyhow::Error> {
    Ok(planet::create(db, planet::NewPlanet { name: name.into(), ..Default::default() }).await?)
}

pub async fn seed_character(db: &DatabaseConnection, name: &str) -> Result<character::Model, anyhow::Error> {
    Ok(character::create(db, character::NewCharacter { name: name.into(), ..Default::default() }).await?)
}

/// Migrated SQLite file behind a multi-connection pool, for tests that race
/// writers against each other. Keep the `TempDir` alive for the test's duration.
pub async fn file_db() -> Result<(tempfile::TempDir, DatabaseConnection), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let cfg = models::db::DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("race.db").display()),
        max_connections: 8,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    models::db::migrate(&db).await?;
    Ok((dir, db))
}
