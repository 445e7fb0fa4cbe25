//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use ngo_api::{create_app, create_app_state, create_in_memory_app_state, AppState};
use ngo_common::{AdminConfig, AppConfig};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Administrator account every test server bootstraps
pub const ADMIN_EMAIL: &str = "admin@ngo.org";
pub const ADMIN_PASSWORD: &str = "Admin1234";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over in-memory repositories
    pub async fn start() -> Result<Self> {
        let state = create_in_memory_app_state(test_config()).await?;
        Self::start_with_state(state).await
    }

    /// Start a server against the PostgreSQL named by `DATABASE_URL`
    pub async fn start_postgres() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = test_config();
        config.database.url = std::env::var("DATABASE_URL")?;

        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(request: RequestBuilder, token: Option<&str>) -> Result<Response> {
        let request = match token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        };
        Ok(request.send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), None).await
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), Some(token)).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body), None).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Self::send(self.client.put(self.url(path)).json(body), None).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Self::send(self.client.delete(self.url(path)), None).await
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.delete(self.url(path)), Some(token)).await
    }
}

/// Configuration shared by every test server
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::for_testing("integration-test-secret");
    config.admin = Some(AdminConfig {
        email: ADMIN_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    });
    config
}

/// Helper to check if a database is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
