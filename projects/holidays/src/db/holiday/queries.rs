use chrono::NaiveDate;
use diesel::prelude::*;
use thiserror::Error;
use crate::db::{holiday::models::*, schema::feriados::dsl::*};

#[derive(Debug, Error)]
pub enum InsertHolidayError {
    #[error("InsertHoliday: {source}")]
    InsertHoliday{ 
        #[from]
        source: diesel::result::Error 
    },
}

pub fn insert_holiday(
    conn: &mut PgConnection,
    new: &NewHoliday
) -> Result<Holiday, InsertHolidayError> {
    diesel::insert_into(feriados)
        .values(new)
        .returning(Holiday::as_returning())
        .get_result(conn)
        .map_err(|source| InsertHolidayError::InsertHoliday{ source })
}

#[derive(Debug, Error)]
pub enum GetAllHolidaysError {
    #[error("GetAllHolidays: {source}")]
    GetAllHolidays{ 
        #[from] 
        source: diesel::result::Error 
    },
}

/// Every stored holiday, earliest date first.
pub fn get_all_holidays(
    conn: &mut PgConnection
) -> Result<Vec<Holiday>, GetAllHolidaysError> {
    feriados
        .select(Holiday::as_select())
        .order_by((fecha.asc(), id.asc()))
        .load(conn)
        .map_err(|source| GetAllHolidaysError::GetAllHolidays{ source })
}

#[derive(Debug, Error)]
pub enum GetHolidayByDateError {
    #[error("GetHolidayByDate: {source}")]
    GetHolidayByDate{
        #[from] 
        source: diesel::result::Error
    },
}

/// If several rows share `date_val` (two imports of the same year), the one with the
/// lowest id wins.
pub fn get_holiday_by_date(
    conn: &mut PgConnection,
    date_val: NaiveDate
) -> Result<Option<Holiday>, GetHolidayByDateError> {
    feriados
        .filter(fecha.eq(date_val))
        .select(Holiday::as_select())
        .order_by(id.asc())
        .first(conn)
        .optional()
        .map_err(|source| GetHolidayByDateError::GetHolidayByDate{ source })
}
