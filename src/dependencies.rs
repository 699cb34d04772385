use std::sync::{Arc, OnceLock};

use crate::adapters::engine::{EngineError, KeyValueEngine, MemoryEngine};
use crate::config::{Config, ConfigError};
use crate::database::PgEngine;

pub fn config() -> Result<&'static Config, ConfigError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

/// Picks the engine named by the configuration.
pub async fn engine(config: &Config) -> Result<Arc<dyn KeyValueEngine>, EngineError> {
	match &config.database_url {
		Some(url) => {
			let engine = PgEngine::connect(url, config.database_max_connections, config.engine_timeout).await?;
			tracing::info!("Using Postgres key-value engine");
			Ok(Arc::new(engine))
		}
		None => {
			tracing::warn!("DATABASE_URL is not set; posts are kept in memory and lost on restart");
			Ok(Arc::new(MemoryEngine::new()))
		}
	}
}
