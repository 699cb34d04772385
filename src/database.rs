use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::adapters::engine::{EngineError, KeyValueEngine};

const CREATE_KV_TABLE: &str = "CREATE TABLE IF NOT EXISTS kv_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)";

/// Key-value engine on a single Postgres table.
#[derive(Clone, Debug)]
pub struct PgEngine {
	pool: PgPool,
}

impl PgEngine {
	pub async fn connect(
		url: &str,
		max_connections: u32,
		acquire_timeout: Duration,
	) -> Result<Self, EngineError> {
		let pool = PgPoolOptions::new()
			.max_connections(max_connections)
			.acquire_timeout(acquire_timeout)
			.connect(url)
			.await
			.map_err(|err| EngineError::Connection(err.to_string()))?;

		let engine = Self { pool };
		engine.migrate().await?;
		Ok(engine)
	}

	async fn migrate(&self) -> Result<(), EngineError> {
		sqlx::query(CREATE_KV_TABLE).execute(&self.pool).await.map_err(|err| {
			tracing::error!("Failed to create kv_store table : {:?}", err);
			EngineError::Query(err.to_string())
		})?;
		Ok(())
	}
}

#[async_trait]
impl KeyValueEngine for PgEngine {
	async fn get(
		&self,
		key: &str,
	) -> Result<Option<String>, EngineError> {
		sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = $1")
			.bind(key)
			.fetch_optional(&self.pool)
			.await
			.map_err(|err| EngineError::Query(err.to_string()))
	}

	async fn set(
		&self,
		key: &str,
		value: String,
	) -> Result<(), EngineError> {
		sqlx::query("INSERT INTO kv_store (key, value) VALUES ($1, $2) ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value")
			.bind(key)
			.bind(value)
			.execute(&self.pool)
			.await
			.map_err(|err| EngineError::Query(err.to_string()))?;
		Ok(())
	}

	async fn del(
		&self,
		key: &str,
	) -> Result<(), EngineError> {
		sqlx::query("DELETE FROM kv_store WHERE key = $1")
			.bind(key)
			.execute(&self.pool)
			.await
			.map_err(|err| EngineError::Query(err.to_string()))?;
		Ok(())
	}
}
