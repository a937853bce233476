use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, patch, post},
};
use portfolio_contact_form::HttpContactApi;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

use crate::template::{NotFoundTemplate, Template};

mod api;
mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: portfolio_contact::Command,
    pub contact_query: portfolio_contact::Query,
    pub contact_api: Arc<HttpContactApi>,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, pool: SqlitePool) -> anyhow::Result<Self> {
        let contact_api = HttpContactApi::new(
            &config.backend_base_url(),
            std::time::Duration::from_secs(config.backend.timeout_secs),
        )?;

        Ok(Self {
            config,
            contact_command: portfolio_contact::Command(pool.clone()),
            contact_query: portfolio_contact::Query(pool.clone()),
            contact_api: Arc::new(contact_api),
            pool,
        })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let site = template.site();

    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate { site })
}

async fn index() -> Redirect {
    Redirect::to("/contact")
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api", get(api::root))
        .route("/api/", get(api::root))
        .route("/api/contact", post(api::create).get(api::list))
        .route("/api/contact/{id}/status", patch(api::update_status))
        .layer(CorsLayer::permissive())
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index))
        .route("/contact", get(contact::page).post(contact::action))
        .merge(api_router())
        .fallback(fallback)
        .with_state(app_state)
}
