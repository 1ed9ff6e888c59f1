use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Serialize;
use crate::db::schema::feriados;

/// A stored holiday, serialized with the public API field names.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize)]
#[diesel(table_name = feriados)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Holiday {
    pub id: i32,
    #[diesel(column_name = nombre_feriado)]
    #[serde(rename = "nombre_feriado")]
    pub name: String,
    #[diesel(column_name = fecha)]
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[diesel(column_name = tipo)]
    #[serde(rename = "tipo")]
    pub kind: String,
    #[diesel(column_name = descripcion)]
    #[serde(rename = "descripción")]
    pub description: String,
    #[diesel(column_name = dia_semana)]
    #[serde(rename = "dia_semana")]
    pub weekday_name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feriados)]
pub struct NewHoliday<'a> {
    #[diesel(column_name = nombre_feriado)]
    pub name: &'a str,
    #[diesel(column_name = fecha)]
    pub date: NaiveDate,
    #[diesel(column_name = tipo)]
    pub kind: &'a str,
    #[diesel(column_name = descripcion)]
    pub description: &'a str,
    #[diesel(column_name = dia_semana)]
    pub weekday_name: &'a str,
}
