use axum::http::StatusCode;

mod helpers;

#[tokio::test]
async fn test_health_and_ready() -> anyhow::Result<()> {
    let state = helpers::setup_test_state("http://127.0.0.1:8001").await?;

    let response = helpers::send(state.router(), helpers::empty_request("GET", "/health")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "max-age=0");

    let response = helpers::send(state.router(), helpers::empty_request("GET", "/ready")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(helpers::body_json(response).await?["status"], "ready");

    state.pool.close().await;

    let response = helpers::send(state.router(), helpers::empty_request("GET", "/ready")).await?;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    Ok(())
}
