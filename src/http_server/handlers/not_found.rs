use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Every client of this service speaks JSON, so unknown routes do too.
pub async fn not_found_handler(method: Method, uri: Uri) -> Response {
    tracing::debug!(%method, path = uri.path(), "no route");
    let body = serde_json::json!({
        "error": format!("no route for {} {}", method, uri.path()),
    });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
