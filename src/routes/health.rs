use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Serialize)]
pub struct Probe {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

/// The process is up and routing requests.
pub async fn health() -> (StatusCode, Json<Probe>) {
    (
        StatusCode::OK,
        Json(Probe {
            status: "ok",
            reason: None,
        }),
    )
}

/// The contact inbox can be reached, so submissions would be stored.
pub async fn ready(State(pool): State<SqlitePool>) -> (StatusCode, Json<Probe>) {
    if let Err(e) = sqlx::query("SELECT 1").fetch_one(&pool).await {
        tracing::error!("inbox database unreachable: {e}");

        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Probe {
                status: "not_ready",
                reason: Some("database_unavailable"),
            }),
        );
    }

    (
        StatusCode::OK,
        Json(Probe {
            status: "ready",
            reason: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let (status, Json(probe)) = health().await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(probe.status, "ok");
    }

    #[tokio::test]
    async fn test_ready_while_inbox_reachable() {
        let (status, Json(probe)) = ready(State(pool().await)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(probe.status, "ready");
        assert!(probe.reason.is_none());
    }

    #[tokio::test]
    async fn test_not_ready_once_pool_closed() {
        let pool = pool().await;
        pool.close().await;

        let (status, Json(probe)) = ready(State(pool)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(probe.reason, Some("database_unavailable"));
    }
}
