use diesel::prelude::*;
use interfaces_gob_cl_holidays::index::{fetch_holidays, FetchHolidaysError, SourceHoliday};
use thiserror::Error;
use tracing::info;

use crate::db::holiday::{
    models::{Holiday, NewHoliday},
    queries::{insert_holiday, InsertHolidayError},
};
use crate::utils::{
    date::{parse_iso_date, ParseIsoDateError},
    weekday::weekday_name,
};

#[derive(Debug, Error)]
pub enum ImportHolidaysError {
    #[error("ParseDate: {nombre}: {source}")]
    ParseDate {
        nombre: String,
        source: ParseIsoDateError,
    },

    #[error("InsertHoliday: {source}")]
    InsertHoliday {
        #[from]
        source: InsertHolidayError,
    },

    #[error("Transaction: {source}")]
    Transaction {
        #[from]
        source: diesel::result::Error,
    },
}

/// Inserts one row per source holiday inside a single transaction.
///
/// The description is the holiday name; the source has no richer text.
pub fn import_holidays(
    conn: &mut PgConnection,
    source: &[SourceHoliday],
) -> Result<Vec<Holiday>, ImportHolidaysError> {
    conn.transaction(|conn| {
        source
            .iter()
            .map(|holiday| import_holiday(conn, holiday))
            .collect()
    })
}

fn import_holiday(
    conn: &mut PgConnection,
    holiday: &SourceHoliday,
) -> Result<Holiday, ImportHolidaysError> {
    let date = parse_iso_date(&holiday.fecha).map_err(|source| ImportHolidaysError::ParseDate {
        nombre: holiday.nombre.clone(),
        source,
    })?;

    let new = NewHoliday {
        name: &holiday.nombre,
        date,
        kind: &holiday.tipo,
        description: &holiday.nombre,
        weekday_name: weekday_name(date),
    };

    Ok(insert_holiday(conn, &new)?)
}

#[derive(Debug, Error)]
pub enum ImportYearError {
    #[error("FetchHolidays: {source}")]
    FetchHolidays {
        #[from]
        source: FetchHolidaysError,
    },

    #[error("ImportHolidays: {source}")]
    ImportHolidays {
        #[from]
        source: ImportHolidaysError,
    },
}

pub async fn import_year(
    conn: &mut PgConnection,
    source_url: &str,
) -> Result<Vec<Holiday>, ImportYearError> {
    let source = fetch_holidays(source_url).await?;
    info!(url = %source_url, count = source.len(), "fetched holidays");

    let imported = import_holidays(conn, &source)?;
    info!(count = imported.len(), "inserted holidays");

    Ok(imported)
}
