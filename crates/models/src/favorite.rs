//! A user's favorite character or planet.
//!
//! Each row points at exactly one target. `FavoriteTarget` is the only way
//! rows are written or looked up, so the two nullable FK columns never both get set.
use std::fmt;

use sea_orm::{entity::prelude::*, sea_query::SimpleExpr, ConnectionTrait, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{character, planet, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Character,
    Planet,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into(),
            Relation::Character => Entity::belongs_to(character::Entity).from(Column::CharacterId).to(character::Column::Id).into(),
            Relation::Planet => Entity::belongs_to(planet::Entity).from(Column::PlanetId).to(planet::Column::Id).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<character::Entity> for Entity {
    fn to() -> RelationDef { Relation::Character.def() }
}

impl Related<planet::Entity> for Entity {
    fn to() -> RelationDef { Relation::Planet.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "character",
            FavoriteTarget::Planet(_) => "planet",
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            FavoriteTarget::Character(id) | FavoriteTarget::Planet(id) => *id,
        }
    }

    fn filter(&self) -> SimpleExpr {
        match self {
            FavoriteTarget::Character(id) => Column::CharacterId.eq(*id),
            FavoriteTarget::Planet(id) => Column::PlanetId.eq(*id),
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id())
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, user_id: i32, target: FavoriteTarget) -> Result<Model, errors::ModelError> {
    let (character_id, planet_id) = match target {
        FavoriteTarget::Character(id) => (Some(id), None),
        FavoriteTarget::Planet(id) => (None, Some(id)),
    };
    let am = ActiveModel {
        user_id: Set(user_id),
        character_id: Set(character_id),
        planet_id: Set(planet_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::Db)
}

pub async fn find_for_user<C: ConnectionTrait>(db: &C, user_id: i32, target: FavoriteTarget) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .filter(target.filter())
        .one(db)
        .await
        .map_err(errors::ModelError::Db)
}

pub async fn list_for_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(errors::ModelError::Db)
}
