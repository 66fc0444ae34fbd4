pub mod checks;
pub mod client;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod settings;
