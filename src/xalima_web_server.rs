use crate::core::config::{StorageBackend, StorageConfig};
use crate::core::kv_store::{MySqlStore, RedisStore};
use crate::core::{AppConfig, AppError, KvStore};
use crate::db::seed::initialize_data;
use crate::routes::xalima_routes;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use anyhow::Context;
use sqlx::mysql::MySqlPoolOptions;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct XalimaWebServer {
    port: u16,
    server: Server,
    store: KvStore,
}

impl XalimaWebServer {
    pub async fn build(configuration: AppConfig) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.server.host, configuration.server.port
        );

        let store = connect_store(&configuration.storage).await?;

        if configuration.application.seed_sample_projects && initialize_data(&store).await? {
            tracing::info!("Seeded the sample projects");
        }

        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, store.clone(), configuration).await?;

        Ok(Self { port, server, store })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> KvStore {
        self.store.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn connect_store(config: &StorageConfig) -> Result<KvStore, anyhow::Error> {
    let store = match config.backend {
        StorageBackend::Memory => KvStore::in_memory(),
        StorageBackend::Redis => {
            let redis = config
                .redis
                .as_ref()
                .context("storage.redis must be set for the redis backend")?;
            KvStore::Redis(RedisStore::new(redis.connect()?))
        }
        StorageBackend::MySql => {
            let mysql = config
                .mysql
                .as_ref()
                .context("storage.mysql must be set for the mysql backend")?;
            let pool = MySqlPoolOptions::new()
                .acquire_timeout(std::time::Duration::from_secs(5))
                .connect_lazy_with(mysql.connect());
            let store = MySqlStore::new(pool);
            store.migrate().await?;
            KvStore::MySql(store)
        }
    };
    tracing::info!("Using the {:?} store", config.backend);
    Ok(store)
}

pub async fn run(
    listener: TcpListener,
    store: KvStore,
    configuration: AppConfig,
) -> Result<Server, anyhow::Error> {
    let store = Data::new(store);
    let admin_config = Data::new(configuration.admin);
    let json_limit = configuration.application.json_limit_bytes;

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
                header::HeaderName::from_static("x-owner-token"),
            ])
            .supports_credentials();
        let json_config = web::JsonConfig::default()
            .limit(json_limit)
            .error_handler(|err, _| AppError::bad_request(err.to_string()).into());
        let query_config = web::QueryConfig::default()
            .error_handler(|err, _| AppError::bad_request(err.to_string()).into());
        App::new()
            .configure(xalima_routes)
            .app_data(store.clone())
            .app_data(admin_config.clone())
            .app_data(json_config)
            .app_data(query_config)
            .wrap(cors)
            .wrap(TracingLogger::default())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
