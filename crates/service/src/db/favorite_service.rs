use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{info, instrument};

use common::observability::{FAVORITES_ADDED_TOTAL, FAVORITES_REMOVED_TOTAL};
use models::{character, favorite::{self, FavoriteTarget}, planet, user};
use crate::errors::ServiceError;

async fn ensure_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), ServiceError> {
    match user::Entity::find_by_id(user_id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::not_found("user")),
    }
}

async fn ensure_target<C: ConnectionTrait>(db: &C, target: FavoriteTarget) -> Result<(), ServiceError> {
    let exists = match target {
        FavoriteTarget::Character(id) => character::Entity::find_by_id(id).one(db).await?.is_some(),
        FavoriteTarget::Planet(id) => planet::Entity::find_by_id(id).one(db).await?.is_some(),
    };
    if exists { Ok(()) } else { Err(ServiceError::not_found(target.kind())) }
}

/// All favorites of a user, oldest first. The user must exist.
pub async fn list_user_favorites(db: &DatabaseConnection, user_id: i32) -> Result<Vec<favorite::Model>, ServiceError> {
    ensure_user(db, user_id).await?;
    let rows = favorite::list_for_user(db, user_id).await?;
    Ok(rows)
}

/// Add a favorite inside one transaction: user and target must exist and the
/// pair must be new. Any early return drops the transaction, which rolls back.
#[instrument(skip(db, target), fields(target = %target))]
pub async fn add_favorite(db: &DatabaseConnection, user_id: i32, target: FavoriteTarget) -> Result<favorite::Model, ServiceError> {
    let txn = db.begin().await?;
    ensure_user(&txn, user_id).await?;
    ensure_target(&txn, target).await?;
    if favorite::find_for_user(&txn, user_id, target).await?.is_some() {
        return Err(ServiceError::Conflict("This favorite already exist".into()));
    }
    let created = favorite::create(&txn, user_id, target)
        .await
        .map_err(|e| ServiceError::on_insert(e, "This favorite already exist"))?;
    txn.commit().await?;

    FAVORITES_ADDED_TOTAL.with_label_values(&[target.kind()]).inc();
    info!(favorite_id = created.id, user_id, "favorite added");
    Ok(created)
}

/// Remove a favorite; `NotFound("favorite")` if the user never added it.
#[instrument(skip(db, target), fields(target = %target))]
pub async fn remove_favorite(db: &DatabaseConnection, user_id: i32, target: FavoriteTarget) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let Some(existing) = favorite::find_for_user(&txn, user_id, target).await? else {
        return Err(ServiceError::not_found("favorite"));
    };
    favorite::Entity::delete_by_id(existing.id).exec(&txn).await?;
    txn.commit().await?;

    FAVORITES_REMOVED_TOTAL.with_label_values(&[target.kind()]).inc();
    info!(favorite_id = existing.id, user_id, "favorite removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_character, seed_planet, seed_user};

    #[tokio::test]
    async fn add_list_remove_planet_favorite() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "luke@rebels.org").await?;
        let p = seed_planet(&db, "Dagobah").await?;

        assert!(list_user_favorites(&db, u.id).await?.is_empty());

        let f = add_favorite(&db, u.id, FavoriteTarget::Planet(p.id)).await?;
        assert_eq!(f.planet_id, Some(p.id));
        assert_eq!(f.character_id, None);

        let favs = list_user_favorites(&db, u.id).await?;
        assert_eq!(favs.len(), 1);
        assert_eq!(favs[0].id, f.id);

        remove_favorite(&db, u.id, FavoriteTarget::Planet(p.id)).await?;
        assert!(list_user_favorites(&db, u.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_favorite_conflicts() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "han@falcon.io").await?;
        let c = seed_character(&db, "Chewbacca").await?;

        add_favorite(&db, u.id, FavoriteTarget::Character(c.id)).await?;
        let again = add_favorite(&db, u.id, FavoriteTarget::Character(c.id)).await;
        assert!(matches!(again, Err(ServiceError::Conflict(_))));
        assert_eq!(list_user_favorites(&db, u.id).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn same_id_different_kind_is_a_separate_favorite() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "lando@bespin.city").await?;
        let p = seed_planet(&db, "Bespin").await?;
        let c = seed_character(&db, "Lobot").await?;
        assert_eq!(p.id, c.id);

        add_favorite(&db, u.id, FavoriteTarget::Planet(p.id)).await?;
        add_favorite(&db, u.id, FavoriteTarget::Character(c.id)).await?;
        assert_eq!(list_user_favorites(&db, u.id).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn missing_user_or_target_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "yoda@dagobah.swamp").await?;
        let p = seed_planet(&db, "Endor").await?;

        match add_favorite(&db, u.id + 1, FavoriteTarget::Planet(p.id)).await {
            Err(ServiceError::NotFound(entity)) => assert_eq!(entity, "user"),
            other => panic!("unexpected: {other:?}"),
        }
        match add_favorite(&db, u.id, FavoriteTarget::Planet(p.id + 1)).await {
            Err(ServiceError::NotFound(entity)) => assert_eq!(entity, "planet"),
            other => panic!("unexpected: {other:?}"),
        }
        match add_favorite(&db, u.id, FavoriteTarget::Character(1)).await {
            Err(ServiceError::NotFound(entity)) => assert_eq!(entity, "character"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(list_user_favorites(&db, u.id + 1).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn removing_unknown_favorite_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = seed_user(&db, "ackbar@mon.cala").await?;
        let p = seed_planet(&db, "Mon Cala").await?;

        match remove_favorite(&db, u.id, FavoriteTarget::Planet(p.id)).await {
            Err(ServiceError::NotFound(entity)) => assert_eq!(entity, "favorite"),
            other => panic!("unexpected: {other:?}"),
        }

        add_favorite(&db, u.id, FavoriteTarget::Planet(p.id)).await?;
        // a planet favorite is not removable through the character route
        assert!(remove_favorite(&db, u.id, FavoriteTarget::Character(p.id)).await.is_err());
        assert_eq!(list_user_favorites(&db, u.id).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn failed_add_leaves_connection_usable() -> Result<(), anyhow::Error> {
        // the in-memory pool has a single connection; a leaked transaction would deadlock here
        let db = get_db().await?;
        let u = seed_user(&db, "wedge@rogue.sq").await?;
        assert!(add_favorite(&db, u.id, FavoriteTarget::Planet(42)).await.is_err());
        let p = seed_planet(&db, "Corellia").await?;
        add_favorite(&db, u.id, FavoriteTarget::Planet(p.id)).await?;
        Ok(())
    }
}
