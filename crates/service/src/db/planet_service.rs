use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::info;

use models::planet;
use crate::{errors::ServiceError, pagination::{self, Pagination}};

pub async fn list_planets(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<planet::Model>, ServiceError> {
    let finder = planet::Entity::find().order_by_asc(planet::Column::Id);
    Ok(pagination::fetch(db, finder, page).await?)
}

pub async fn get_planet(db: &DatabaseConnection, id: i32) -> Result<Option<planet::Model>, ServiceError> {
    Ok(planet::Entity::find_by_id(id).one(db).await?)
}

pub async fn create_planet(db: &DatabaseConnection, input: planet::NewPlanet) -> Result<planet::Model, ServiceError> {
    planet::validate(&input)?;
    let existing = planet::Entity::find()
        .filter(planet::Column::Name.eq(input.name.trim()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::Conflict("Planet already exists".into()));
    }
    let created = planet::create(db, input)
        .await
        .map_err(|e| ServiceError::on_insert(e, "Planet already exists"))?;
    info!(planet_id = created.id, name = %created.name, "planet created");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{file_db, get_db};

    #[tokio::test]
    async fn planet_service_roundtrip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let hoth = create_planet(&db, planet::NewPlanet {
            name: "Hoth".into(),
            climate: Some("frozen".into()),
            diameter: Some(7200),
            ..Default::default()
        }).await?;
        let naboo = create_planet(&db, planet::NewPlanet { name: "Naboo".into(), population: Some(4_500_000_000), ..Default::default() }).await?;

        assert_eq!(get_planet(&db, hoth.id).await?.unwrap().climate.as_deref(), Some("frozen"));
        assert_eq!(get_planet(&db, naboo.id).await?.unwrap().population, Some(4_500_000_000));

        let names: Vec<_> = list_planets(&db, None).await?.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Hoth", "Naboo"]);

        let dup = create_planet(&db, planet::NewPlanet { name: "Hoth".into(), ..Default::default() }).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_planet_creates_conflict_instead_of_failing() -> Result<(), anyhow::Error> {
        let (_dir, db) = file_db().await?;
        let handles: Vec<_> = (0..6)
            .map(|_| {
                let db = db.clone();
                tokio::spawn(async move { create_planet(&db, planet::NewPlanet { name: "Kamino".into(), ..Default::default() }).await })
            })
            .collect();

        let mut created = 0;
        for h in handles {
            match h.await? {
                Ok(_) => created += 1,
                Err(ServiceError::Conflict(msg)) => assert_eq!(msg, "Planet already exists"),
                Err(other) => panic!("unexpected: {other:?}"),
            }
        }
        assert_eq!(created, 1);
        Ok(())
    }
}
