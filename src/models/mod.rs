pub mod admin;
pub mod common;
pub mod donations;
pub mod messages;
pub mod projects;
pub mod settings;
pub mod volunteers;
