//! Public holidays service
//! 
//! - REST API endpoints in `endpoints/`
//! - PostgreSQL models and queries in `db/`
//! - Batch loader for the gob.cl holidays API in `import/`
//! - Requires POSTGRES_HOST, POSTGRES_USER, POSTGRES_PASSWORD, POSTGRES_DB env vars

pub mod config;
pub mod db;
pub mod endpoints;
pub mod import;
pub mod utils;
