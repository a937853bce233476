#![allow(dead_code)]

use std::str::FromStr;

use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use portfolio::{
    AppState, Config,
    config::{BackendConfig, DatabaseConfig, LoggingConfig, ServerConfig, SiteConfig},
};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestState {
    pub app: AppState,
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestState {
    pub fn router(&self) -> Router {
        portfolio::app(self.app.clone())
    }
}

pub fn test_config(backend_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 8001,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_connections: 1,
        },
        backend: BackendConfig {
            base_url: Some(backend_url.to_owned()),
            timeout_secs: 5,
        },
        logging: LoggingConfig::default(),
        site: SiteConfig {
            name: "Test Portfolio".to_owned(),
            email: "hello@portfolio.test".to_owned(),
        },
    }
}

pub async fn setup_test_state(backend_url: &str) -> anyhow::Result<TestState> {
    let dir = TempDir::new()?;
    let path = dir.child("portfolio.db");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    portfolio_db::migrate(&pool).await?;

    let app = AppState::new(test_config(backend_url), pool.clone())?;

    Ok(TestState {
        app,
        pool,
        _dir: dir,
    })
}

pub async fn send(router: Router, request: Request<Body>) -> anyhow::Result<Response> {
    Ok(router.oneshot(request).await?)
}

pub async fn body_string(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn body_json(response: Response) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}
