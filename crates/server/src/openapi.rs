use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(serde::Serialize, ToSchema)]
pub struct MessageDoc {
    #[serde(rename = "Message")]
    pub message: String,
}

#[derive(ToSchema)]
pub struct UserDoc { pub id: i32, pub email: String, pub is_active: bool, pub created_at: String }

#[derive(ToSchema)]
pub struct CreateUserDoc { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct CharacterDoc {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(ToSchema)]
pub struct NewCharacterDoc {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(ToSchema)]
pub struct PlanetDoc {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub gravity: Option<String>,
    pub diameter: Option<i32>,
    pub population: Option<i64>,
}

#[derive(ToSchema)]
pub struct NewPlanetDoc {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub gravity: Option<String>,
    pub diameter: Option<i32>,
    pub population: Option<i64>,
}

#[derive(ToSchema)]
pub struct FavoriteDoc {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::people::list,
        crate::routes::people::get,
        crate::routes::people::create,
        crate::routes::planets::list,
        crate::routes::planets::get,
        crate::routes::planets::create,
        crate::routes::favorites::list_for_user,
        crate::routes::favorites::add_planet,
        crate::routes::favorites::add_people,
        crate::routes::favorites::delete_planet,
        crate::routes::favorites::delete_people,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            UserDoc,
            CreateUserDoc,
            CharacterDoc,
            NewCharacterDoc,
            PlanetDoc,
            NewPlanetDoc,
            FavoriteDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "people"),
        (name = "planets"),
        (name = "favorites")
    )
)]
pub struct ApiDoc;
