pub mod schema;
pub mod holiday;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::prelude::*;
use thiserror::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const CREATE_FERIADOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS feriados (
        id SERIAL PRIMARY KEY,
        nombre_feriado VARCHAR NOT NULL,
        fecha DATE NOT NULL,
        tipo VARCHAR NOT NULL,
        "descripción" VARCHAR NOT NULL,
        dia_semana VARCHAR NOT NULL
    )
"#;

#[derive(Debug, Error)]
pub enum BuildPoolError {
    #[error("BuildPool: {source}")]
    BuildPool {
        #[from]
        source: r2d2::Error,
    },
}

/// Opens the pool eagerly so a bad connection string fails at startup.
pub fn build_pool(database_url: &str) -> Result<PgPool, BuildPoolError> {
    Pool::builder()
        .build(ConnectionManager::<PgConnection>::new(database_url))
        .map_err(|source| BuildPoolError::BuildPool { source })
}

#[derive(Debug, Error)]
pub enum CreateSchemaError {
    #[error("CreateSchema: {source}")]
    CreateSchema {
        #[from]
        source: diesel::result::Error,
    },
}

/// Creates the `feriados` table if it is missing. Existing rows are left alone.
pub fn create_schema(conn: &mut PgConnection) -> Result<(), CreateSchemaError> {
    diesel::sql_query(CREATE_FERIADOS_TABLE)
        .execute(conn)
        .map(|_| ())
        .map_err(|source| CreateSchemaError::CreateSchema { source })
}
