pub mod core;
pub mod db;
pub mod models;
pub mod routes;
pub mod xalima_web_server;
