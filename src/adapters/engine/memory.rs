use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EngineError, KeyValueEngine};

/// Process-local engine. Contents do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryEngine {
	entries: RwLock<HashMap<String, String>>,
}

impl MemoryEngine {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn len(&self) -> usize {
		self.entries.read().await.len()
	}
}

#[async_trait]
impl KeyValueEngine for MemoryEngine {
	async fn get(
		&self,
		key: &str,
	) -> Result<Option<String>, EngineError> {
		Ok(self.entries.read().await.get(key).cloned())
	}

	async fn set(
		&self,
		key: &str,
		value: String,
	) -> Result<(), EngineError> {
		self.entries.write().await.insert(key.to_string(), value);
		Ok(())
	}

	async fn del(
		&self,
		key: &str,
	) -> Result<(), EngineError> {
		self.entries.write().await.remove(key);
		Ok(())
	}
}
