use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::favorite;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub gravity: Option<String>,
    pub diameter: Option<i32>,
    pub population: Option<i64>,
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

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub gravity: Option<String>,
    pub diameter: Option<i32>,
    pub population: Option<i64>,
}

pub fn validate(input: &NewPlanet) -> Result<(), errors::ModelError> {
    if input.name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if input.name.len() > 250 { return Err(errors::ModelError::Validation("name too long (max 250)".into())); }
    if input.diameter.is_some_and(|d| d < 0) { return Err(errors::ModelError::Validation("diameter must be >= 0".into())); }
    if input.population.is_some_and(|p| p < 0) { return Err(errors::ModelError::Validation("population must be >= 0".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewPlanet) -> Result<Model, errors::ModelError> {
    validate(&input)?;
    let am = ActiveModel {
        name: Set(input.name.trim().to_string()),
        climate: Set(input.climate),
        terrain: Set(input.terrain),
        gravity: Set(input.gravity),
        diameter: Set(input.diameter),
        population: Set(input.population),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::Db)
}
