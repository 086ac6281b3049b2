pub mod auth;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod users;
pub mod vehicles;
