pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use db::create_pool;
pub use routes::AppState;

use axum::Router;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Full application router with the middleware stack the server runs with.
pub fn app(state: AppState) -> Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
