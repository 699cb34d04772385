pub(crate) mod post_repository;
use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::adapters::engine::{EngineError, KeyValueEngine};
use crate::domain::post::entity::Category;


#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error(transparent)]
	Engine(#[from] EngineError),
	#[error("engine {operation} on `{key}` timed out after {after:?}")]
	Timeout {
		operation: &'static str,
		key: String,
		after: Duration,
	},
	#[error("partition `{key}` holds malformed data: {source}")]
	Codec {
		key: String,
		#[source]
		source: serde_json::Error,
	},
}

/// One async mutex per category.
///
/// Held across the read-modify-write of a create so that concurrent
/// creates on the same category in this process cannot drop each other's
/// posts. There is no lock spanning categories.
#[derive(Debug, Default)]
pub(crate) struct PartitionLocks {
	offer: Mutex<()>,
	request: Mutex<()>,
	resource: Mutex<()>,
}

impl PartitionLocks {
	pub(crate) fn get(
		&self,
		category: Category,
	) -> &Mutex<()> {
		match category {
			Category::Offer => &self.offer,
			Category::Request => &self.request,
			Category::Resource => &self.resource,
		}
	}
}

/// The categorized post store.
///
/// Partition keys are only reachable through the store's own operations:
///
/// ```compile_fail
/// fn raw_engine(repo: &community_help::adapters::repositories::PostRepository) {
///     let _ = &repo.engine;
/// }
/// ```
#[derive(Clone)]
pub struct PostRepository {
	pub(crate) engine: Arc<dyn KeyValueEngine>,
	pub(crate) namespace: Arc<str>,
	pub(crate) engine_timeout: Duration,
	pub(crate) locks: Arc<PartitionLocks>,
}

impl PostRepository {
	pub fn new(
		engine: Arc<dyn KeyValueEngine>,
		namespace: &str,
		engine_timeout: Duration,
	) -> Self {
		Self {
			engine,
			namespace: namespace.into(),
			engine_timeout,
			locks: Default::default(),
		}
	}

	/// Engine key holding the partition of `category`.
	pub fn partition_key(
		&self,
		category: Category,
	) -> String {
		format!("{}:{}", self.namespace, category)
	}
}
