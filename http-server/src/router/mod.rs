use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use tower_http::trace::TraceLayer;

mod fetch;
mod upload;

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, axum::Json(ErrorResponse { error: message })).into_response()
}

pub(crate) fn router(client: sharepoint::Client, max_upload_size: usize) -> axum::Router {
    axum::Router::new()
        .route("/upload", axum::routing::post(upload::handler))
        .route("/fetch/*filepath", axum::routing::get(fetch::handler))
        .layer(Extension(client))
        .layer(DefaultBodyLimit::max(max_upload_size))
        .layer(TraceLayer::new_for_http())
}
