//! Key-value engine backing the post store.
//!
//! Single-key operations are atomic; nothing spans keys.
pub mod memory;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use self::memory::MemoryEngine;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
	#[error("engine connection error: {0}")]
	Connection(String),
	#[error("engine query error: {0}")]
	Query(String),
}

#[async_trait]
pub trait KeyValueEngine: Send + Sync {
	/// Absent keys yield `None`.
	async fn get(
		&self,
		key: &str,
	) -> Result<Option<String>, EngineError>;

	async fn set(
		&self,
		key: &str,
		value: String,
	) -> Result<(), EngineError>;

	/// Deleting a missing key succeeds.
	async fn del(
		&self,
		key: &str,
	) -> Result<(), EngineError>;
}
