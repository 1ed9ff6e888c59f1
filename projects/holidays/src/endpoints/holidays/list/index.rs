use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use thiserror::Error;
use tracing::error;

use crate::db::{
    holiday::queries::{get_all_holidays, GetAllHolidaysError},
    PgPool,
};
use crate::endpoints::detail;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error("GetAllHolidays: {source}")]
    GetAllHolidays {
        #[from]
        source: GetAllHolidaysError,
    },
    #[error("BlockingTask: {source}")]
    BlockingTask {
        #[from]
        source: tokio::task::JoinError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "listing holidays failed");
        detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Axum handler: GET /
pub async fn handler(Extension(pool): Extension<PgPool>) -> impl IntoResponse {
    // The pooled connection is returned when the closure ends, on every path.
    let holidays = tokio::task::spawn_blocking(move || -> Result<_, HandlerError> {
        let mut conn = pool.get()?;
        Ok(get_all_holidays(&mut conn)?)
    })
    .await;

    match holidays {
        Ok(Ok(holidays)) => (StatusCode::OK, Json(holidays)).into_response(),
        Ok(Err(err)) => err.into_response(),
        Err(source) => HandlerError::BlockingTask { source }.into_response(),
    }
}
