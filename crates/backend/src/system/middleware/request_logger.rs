use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Logs every HTTP request: method, path, status, duration and the
/// declared response size when there is one.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!("{} {} -> {} ({} ms, {} bytes)", method, path, status.as_u16(), elapsed_ms, size);
    } else if status.is_client_error() {
        tracing::warn!("{} {} -> {} ({} ms, {} bytes)", method, path, status.as_u16(), elapsed_ms, size);
    } else {
        tracing::info!("{} {} -> {} ({} ms, {} bytes)", method, path, status.as_u16(), elapsed_ms, size);
    }

    response
}
