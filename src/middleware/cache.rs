use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

/// Sets cache headers on every response.
/// - `/api/*` and pages: never cached, a submitted form must not be replayed
///   from the browser cache
/// - `/health`, `/ready`: short-lived so probes through a proxy stay fresh
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_probe = matches!(req.uri().path(), "/health" | "/ready");
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_probe {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
