//! HTTP surface: `GET /` and `GET /holiday/{date}`.

pub mod holidays;

use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use tracing::info;

use crate::db::PgPool;
use holidays::{
    list::index::handler as holidays_list_handler,
    read_by_date::index::handler as holidays_read_by_date_handler,
};

pub fn router(pool: PgPool) -> Router {
    Router::new()
        .route("/", get(holidays_list_handler))
        .route("/holiday/{date}", get(holidays_read_by_date_handler))
        .layer(middleware::from_fn(log_request))
        .layer(Extension(pool))
}

/// One access-log line per request, written after the response is built.
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

/// Error body shared by every endpoint: `{"detail": "..."}`.
pub fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": message.into() }))).into_response()
}
