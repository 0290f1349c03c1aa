//! SeaORM entities.

pub mod resource;
pub mod user;
