use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::info;

use models::character;
use crate::{errors::ServiceError, pagination::{self, Pagination}};

pub async fn list_characters(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<character::Model>, ServiceError> {
    let finder = character::Entity::find().order_by_asc(character::Column::Id);
    Ok(pagination::fetch(db, finder, page).await?)
}

pub async fn get_character(db: &DatabaseConnection, id: i32) -> Result<Option<character::Model>, ServiceError> {
    Ok(character::Entity::find_by_id(id).one(db).await?)
}

/// Create a character; names are unique.
pub async fn create_character(db: &DatabaseConnection, input: character::NewCharacter) -> Result<character::Model, ServiceError> {
    character::validate_name(&input.name)?;
    let existing = character::Entity::find()
        .filter(character::Column::Name.eq(input.name.trim()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::Conflict("People already exists".into()));
    }
    let created = character::create(db, input)
        .await
        .map_err(|e| ServiceError::on_insert(e, "People already exists"))?;
    info!(character_id = created.id, name = %created.name, "character created");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn character_service_roundtrip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_character(&db, character::NewCharacter {
            name: "Luke Skywalker".into(),
            height: Some("172".into()),
            eye_color: Some("blue".into()),
            ..Default::default()
        }).await?;

        let found = get_character(&db, c.id).await?.unwrap();
        assert_eq!(found, c);
        assert!(get_character(&db, 404).await?.is_none());

        let dup = create_character(&db, character::NewCharacter { name: "Luke Skywalker".into(), ..Default::default() }).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        let blank = create_character(&db, character::NewCharacter { name: "  ".into(), ..Default::default() }).await;
        assert!(matches!(blank, Err(ServiceError::Model(_))));

        assert_eq!(list_characters(&db, None).await?.len(), 1);
        assert!(list_characters(&db, Pagination::from_query(Some(2), Some(1))).await?.is_empty());
        Ok(())
    }
}
