//! SeaORM-backed operations, one module per resource.

pub mod user_service;
pub mod character_service;
pub mod planet_service;
pub mod favorite_service;
