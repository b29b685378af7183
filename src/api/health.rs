//! Health check endpoint

/// Liveness check endpoint
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    )
)]
pub async fn health_check() -> &'static str {
    "ok"
}
