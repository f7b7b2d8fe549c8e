use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use sqlx::mysql::MySqlConnectOptions;
use sqlx::ConnectOptions;

#[derive(Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub application: ApplicationConfig,
    pub storage: StorageConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, config::ConfigError> {
        let base_path = std::env::current_dir()
            .map_err(|e| config::ConfigError::Message(format!("Failed to find the current dir: {}", e)))?;
        let config_dir = base_path.join("src/core/configurations");

        let app_environment: Environment = std::env::var("XALIMA_APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(config::ConfigError::Message)?;

        let configurations = config::Config::builder()
            .add_source(
                config::File::from(config_dir.join(format!("{}.yaml", app_environment.as_str())))
                    .required(true),
            )
            .add_source(
                config::Environment::with_prefix("XALIMA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        configurations.try_deserialize()
    }
}

#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationConfig {
    #[serde(default = "default_seed_sample_projects")]
    pub seed_sample_projects: bool,
    /// Upper bound for JSON bodies; settings carry the logo inline.
    #[serde(default = "default_json_limit_bytes")]
    pub json_limit_bytes: usize,
}

fn default_seed_sample_projects() -> bool {
    true
}

fn default_json_limit_bytes() -> usize {
    10 * 1024 * 1024
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Redis,
    MySql,
}

#[derive(Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub redis: Option<RedisConfig>,
    pub mysql: Option<MySqlConfig>,
}

#[derive(Deserialize, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: String,
    pub password: Option<Secret<String>>,
}

impl RedisConfig {
    pub fn connect(&self) -> Result<redis::Client, redis::RedisError> {
        let url = format!(
            "redis://:{password}@{host}:{port}",
            password = self
                .password
                .as_ref()
                .map(|p| p.expose_secret().as_str())
                .unwrap_or(""),
            host = self.host,
            port = self.port
        );
        redis::Client::open(url)
    }
}

#[derive(Deserialize, Clone)]
pub struct MySqlConfig {
    pub username: String,
    pub password: Secret<String>,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

impl MySqlConfig {
    pub fn connect(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(self.password.expose_secret())
            .port(self.port)
            .database(&self.database_name);

        options.log_statements(tracing::log::LevelFilter::Trace)
    }
}

#[derive(Deserialize, Clone)]
pub struct AdminConfig {
    /// Value the host puts in `X-Owner-Token` for the site owner.
    pub owner_token: Secret<String>,
    pub jwt_secret: Secret<String>,
    pub token_expiration_hours: i64,
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not supported environment. Use either `local` or `production` ",
                other
            )),
        }
    }
}
