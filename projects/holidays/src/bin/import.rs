use chrono::{Datelike, Utc};
use clap::Parser;
use diesel::{Connection, ConnectionError, PgConnection};
use interfaces_gob_cl_holidays::index::year_url;
use thiserror::Error;
use tracing::{error, info};
use utils_trace::init as tracing_init;
use projects_holidays::{
	config::{ConfigError, DatabaseConfig},
	db::{create_schema, CreateSchemaError},
	import::index::{import_year, ImportYearError},
};

/// Creates the holidays table and loads one year of holidays into it.
///
/// Running it twice for the same year inserts the rows twice.
#[derive(Debug, Parser)]
#[command(name = "holidays_import", version)]
struct Cli {
	/// Year to import, defaults to the current one
	#[arg(long)]
	year: Option<i32>,

	/// Full source URL, takes precedence over --year
	#[arg(long, env = "HOLIDAYS_SOURCE_URL")]
	source_url: Option<String>,

	/// Create the table and stop
	#[arg(long)]
	schema_only: bool,
}

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
	#[error("LoadConfig: {source}")]
	LoadConfig {
		#[source]
		source: ConfigError,
	},
	#[error("Connect: {source}")]
	Connect {
		#[source]
		source: ConnectionError,
	},
	#[error("CreateSchema: {source}")]
	CreateSchema {
		#[source]
		source: CreateSchemaError,
	},
	#[error("ImportYear: {source}")]
	ImportYear {
		#[source]
		source: ImportYearError,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	let cli = Cli::parse();

    tracing_init("info")
        .map_err(|source| MainError::TracingInit { source })?;

	run(cli).await.inspect_err(|err| error!(error = %err, "import aborted"))
}

async fn run(cli: Cli) -> Result<(), MainError> {
	let config = DatabaseConfig::from_env()
		.map_err(|source| MainError::LoadConfig { source })?;

	let mut conn = PgConnection::establish(&config.database_url())
		.map_err(|source| MainError::Connect { source })?;

	info!("Creating tables...");
	create_schema(&mut conn)
		.map_err(|source| MainError::CreateSchema { source })?;
	info!("Tables created successfully!");

	if cli.schema_only {
		return Ok(());
	}

	let url = cli
		.source_url
		.unwrap_or_else(|| year_url(cli.year.unwrap_or_else(|| Utc::now().year())));

	let imported = import_year(&mut conn, &url)
		.await
		.map_err(|source| MainError::ImportYear { source })?;

	info!(count = imported.len(), %url, "import finished");

	Ok(())
}
