use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, error};

use crate::db::{
    holiday::queries::{get_holiday_by_date, GetHolidayByDateError},
    PgPool,
};
use crate::endpoints::detail;
use crate::utils::date::{parse_iso_date, ParseIsoDateError};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("InvalidDate: {source}")]
    InvalidDate {
        #[from]
        source: ParseIsoDateError,
    },
    #[error("HolidayNotFound: {date}")]
    HolidayNotFound {
        date: NaiveDate,
    },
    #[error("GetConnectionFromPool: {source}")]
    GetConnectionFromPool {
        #[from]
        source: r2d2::Error,
    },
    #[error("GetHolidayByDate: {source}")]
    GetHolidayByDate {
        #[from]
        source: GetHolidayByDateError,
    },
    #[error("BlockingTask: {source}")]
    BlockingTask {
        #[from]
        source: tokio::task::JoinError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::InvalidDate { source } => {
                debug!(error = %source, "rejected holiday date");
                detail(StatusCode::BAD_REQUEST, "Invalid date format. Use yyyy-mm-dd.")
            }
            HandlerError::HolidayNotFound { .. } => detail(StatusCode::NOT_FOUND, "Holiday not found"),
            err => {
                error!(error = %err, "holiday lookup failed");
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// Axum handler: GET /holiday/{date}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    let date = match parse_iso_date(&date) {
        Ok(date) => date,
        Err(source) => return HandlerError::InvalidDate { source }.into_response(),
    };

    let holiday = tokio::task::spawn_blocking(move || -> Result<_, HandlerError> {
        let mut conn = pool.get()?;
        Ok(get_holiday_by_date(&mut conn, date)?)
    })
    .await;

    match holiday {
        Ok(Ok(Some(holiday))) => (StatusCode::OK, Json(holiday)).into_response(),
        Ok(Ok(None)) => HandlerError::HolidayNotFound { date }.into_response(),
        Ok(Err(err)) => err.into_response(),
        Err(source) => HandlerError::BlockingTask { source }.into_response(),
    }
}
