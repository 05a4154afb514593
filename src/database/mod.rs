pub mod manager;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;
pub mod service;

pub use manager::{DatabaseError, DatabaseManager};
pub use repository::Repository;
