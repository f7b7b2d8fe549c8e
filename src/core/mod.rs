pub mod admin_auth;
pub mod config;
pub mod kv_store;
mod responses;
mod telemetry;
pub mod utils;

pub use self::config::AppConfig;
pub use kv_store::{KvStore, StoreError};
pub use responses::*;
pub use telemetry::*;
