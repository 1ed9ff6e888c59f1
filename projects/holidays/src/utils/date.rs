use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseIsoDateError {
    #[error("NotIsoShaped: {value:?} is not yyyy-mm-dd")]
    NotIsoShaped {
        value: String,
    },

    #[error("InvalidCalendarDate: {value:?}: {source}")]
    InvalidCalendarDate {
        value: String,
        source: chrono::ParseError,
    },
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts short years such as `24-01-01`, so the shape is checked first:
/// four digit year, two digit month and day, `-` separators.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ParseIsoDateError> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shaped {
        return Err(ParseIsoDateError::NotIsoShaped { value: value.to_string() });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| {
        ParseIsoDateError::InvalidCalendarDate { value: value.to_string(), source }
    })
}
