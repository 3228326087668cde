pub mod auth;
pub mod data_validation;
pub mod settings;
