//! Star Wars characters, exposed over HTTP as `/people`.
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::favorite;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
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

/// Insert payload; everything but `name` is optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NewCharacter {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if name.len() > 250 { return Err(errors::ModelError::Validation("name too long (max 250)".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewCharacter) -> Result<Model, errors::ModelError> {
    validate_name(&input.name)?;
    let am = ActiveModel {
        name: Set(input.name.trim().to_string()),
        height: Set(input.height),
        mass: Set(input.mass),
        hair_color: Set(input.hair_color),
        eye_color: Set(input.eye_color),
        birth_year: Set(input.birth_year),
        gender: Set(input.gender),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::Db)
}
