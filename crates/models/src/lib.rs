pub mod errors;
pub mod db;
pub mod user;
pub mod character;
pub mod planet;
pub mod favorite;
