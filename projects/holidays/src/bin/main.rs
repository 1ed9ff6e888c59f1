use axum::serve;
use thiserror::Error;
use tracing::info;
use utils_trace::init as tracing_init;
use projects_holidays::{
	config::{ConfigError, ServerConfig},
	db::{build_pool, BuildPoolError},
	endpoints::router,
};

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
	#[error("BuildPool: {source}")]
	BuildPool {
		#[source]
		source: BuildPoolError,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	}
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    tracing_init("info")
        .map_err(|source| MainError::TracingInit { source })?;

	let config = ServerConfig::from_env()
		.map_err(|source| MainError::LoadConfig { source })?;

	info!(host = %config.database.host, db = %config.database.name, "connecting to database");

	let pool = build_pool(&config.database.database_url())
		.map_err(|source| MainError::BuildPool { source })?;

	let app = router(pool);

	let listener = tokio::net::TcpListener::bind(config.addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!("Server running on addr: {}", config.addr);

	serve(listener, app)
		.await
		.map_err(|source| MainError::Serve { source })?;

	Ok(())
}
