use once_cell::sync::Lazy;
use reqwest::multipart::{Form, Part};
use secrecy::Secret;
use serde_json::Value;
use xalima::core::config::StorageBackend;
use xalima::core::{get_subscriber, init_subscriber, AppConfig, KvStore};
use xalima::xalima_web_server::XalimaWebServer;

pub const OWNER_TOKEN: &str = "test-owner-token";
pub const ADMIN_PASSWORD: &str = "abc123";

// Set TEST_LOG to see the bunyan output of a failing test.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: KvStore,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.api_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn login(&self, password: &str) -> reqwest::Response {
        self.api_client
            .post(self.url("/admin/login"))
            .header("X-Owner-Token", OWNER_TOKEN)
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Logs in with `ADMIN_PASSWORD` (creating it on the first call) and
    /// returns the session token.
    pub async fn login_as_admin(&self) -> String {
        let response = self.login(ADMIN_PASSWORD).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.expect("Login response is not JSON");
        body["data"]["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }

    pub fn admin_request(
        &self,
        method: reqwest::Method,
        path: &str,
        token: &str,
    ) -> reqwest::RequestBuilder {
        self.api_client
            .request(method, self.url(path))
            .header("X-Owner-Token", OWNER_TOKEN)
            .bearer_auth(token)
    }

    pub async fn admin_get(&self, path: &str, token: &str) -> reqwest::Response {
        self.admin_request(reqwest::Method::GET, path, token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_post_json(&self, path: &str, token: &str, body: &Value) -> reqwest::Response {
        self.admin_request(reqwest::Method::POST, path, token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_put_json(&self, path: &str, token: &str, body: &Value) -> reqwest::Response {
        self.admin_request(reqwest::Method::PUT, path, token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_delete(&self, path: &str, token: &str) -> reqwest::Response {
        self.admin_request(reqwest::Method::DELETE, path, token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_upload(&self, path: &str, token: &str, form: Form) -> reqwest::Response {
        self.admin_request(reqwest::Method::POST, path, token)
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_seed(false).await
}

pub async fn spawn_app_with_seed(seed_sample_projects: bool) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = AppConfig::new().expect("Failed to read configuration.");
        c.server.host = "127.0.0.1".to_string();
        c.server.port = 0;
        c.storage.backend = StorageBackend::Memory;
        c.application.seed_sample_projects = seed_sample_projects;
        c.admin.owner_token = Secret::new(OWNER_TOKEN.to_string());
        c
    };

    let application = XalimaWebServer::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let store = application.store();
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build the HTTP client.");

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        port,
        store,
        api_client,
    }
}

pub async fn body_json(response: reqwest::Response) -> Value {
    response.json().await.expect("Response body is not JSON")
}

/// A PNG signature followed by filler, `size` bytes in total.
pub fn fake_png(size: usize) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.resize(size, 0x2A);
    bytes
}

pub fn image_part(bytes: Vec<u8>, file_name: &str, mime: &str) -> Part {
    Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .expect("Invalid mime type")
}
