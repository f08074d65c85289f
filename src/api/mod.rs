pub mod designs;
pub mod health;
pub mod types;
pub mod viewer;
