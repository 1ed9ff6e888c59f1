pub mod date;
pub mod weekday;
