use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{EngineError, KeyValueEngine, MemoryEngine};

/// Wraps a `MemoryEngine` and fails selected operations on demand.
#[derive(Default)]
pub(crate) struct FlakyEngine {
	pub(crate) inner: MemoryEngine,
	pub(crate) fail_get: AtomicBool,
	pub(crate) fail_set: AtomicBool,
	pub(crate) fail_del: AtomicBool,
}

impl FlakyEngine {
	fn check(
		flag: &AtomicBool,
		key: &str,
	) -> Result<(), EngineError> {
		if flag.load(Ordering::SeqCst) {
			return Err(EngineError::Connection(format!("connection reset while touching {key}")));
		}
		Ok(())
	}
}

#[async_trait]
impl KeyValueEngine for FlakyEngine {
	async fn get(
		&self,
		key: &str,
	) -> Result<Option<String>, EngineError> {
		Self::check(&self.fail_get, key)?;
		self.inner.get(key).await
	}

	async fn set(
		&self,
		key: &str,
		value: String,
	) -> Result<(), EngineError> {
		Self::check(&self.fail_set, key)?;
		self.inner.set(key, value).await
	}

	async fn del(
		&self,
		key: &str,
	) -> Result<(), EngineError> {
		Self::check(&self.fail_del, key)?;
		self.inner.del(key).await
	}
}

/// Never answers within any reasonable timeout.
pub(crate) struct StalledEngine;

#[async_trait]
impl KeyValueEngine for StalledEngine {
	async fn get(
		&self,
		_key: &str,
	) -> Result<Option<String>, EngineError> {
		tokio::time::sleep(Duration::from_secs(3600)).await;
		Ok(None)
	}

	async fn set(
		&self,
		_key: &str,
		_value: String,
	) -> Result<(), EngineError> {
		tokio::time::sleep(Duration::from_secs(3600)).await;
		Ok(())
	}

	async fn del(
		&self,
		_key: &str,
	) -> Result<(), EngineError> {
		tokio::time::sleep(Duration::from_secs(3600)).await;
		Ok(())
	}
}
