pub mod list;
pub mod read_by_date;
