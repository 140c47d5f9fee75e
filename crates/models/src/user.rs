use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::favorite;

pub const EMAIL_MAX_LEN: usize = 120;
pub const PASSWORD_MAX_LEN: usize = 80;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Favorite,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Favorite => Entity::has_many(favorite::Entity).into() }
    }
}

impl Related<favorite::Entity> for Entity {
    fn to() -> RelationDef { Relation::Favorite.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    if email.len() > EMAIL_MAX_LEN { return Err(errors::ModelError::Validation(format!("email too long (max {EMAIL_MAX_LEN})"))); }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), errors::ModelError> {
    if password.is_empty() { return Err(errors::ModelError::Validation("password required".into())); }
    if password.len() > PASSWORD_MAX_LEN { return Err(errors::ModelError::Validation(format!("password too long (max {PASSWORD_MAX_LEN})"))); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, email: &str, password: &str) -> Result<Model, errors::ModelError> {
    validate_email(email)?;
    validate_password(password)?;
    let am = ActiveModel {
        email: Set(email.trim().to_string()),
        password: Set(password.to_string()),
        is_active: Set(true),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::Db)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email.trim()))
        .one(db)
        .await
        .map_err(errors::ModelError::Db)
}
