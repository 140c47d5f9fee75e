use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::info;

use models::user;
use crate::{errors::ServiceError, pagination::{self, Pagination}};

/// List users ordered by id; all of them unless a page is requested.
pub async fn list_users(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<user::Model>, ServiceError> {
    let users = pagination::fetch(db, user::Entity::find().order_by_asc(user::Column::Id), page).await?;
    Ok(users)
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, ServiceError> {
    let found = user::Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Create a user; emails are unique.
pub async fn create_user(db: &DatabaseConnection, email: &str, password: &str) -> Result<user::Model, ServiceError> {
    user::validate_email(email)?;
    if user::find_by_email(db, email).await?.is_some() {
        return Err(ServiceError::Conflict("User already exists".into()));
    }
    let created = user::create(db, email, password)
        .await
        .map_err(|e| ServiceError::on_insert(e, "User already exists"))?;
    info!(user_id = created.id, "user created");
    Ok(created)
}
