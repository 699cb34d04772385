use std::future::Future;

use chrono::Utc;
use futures::future::join_all;
use uuid::Uuid;

use crate::{
	adapters::engine::EngineError,
	domain::post::{
		entity::{Category, Post},
		PostContent, PostsByCategory,
	},
};

use super::{PostRepository, StoreError};

impl PostRepository {
	/// Prepends a new post to the partition of `category`.
	///
	/// The partition is read, extended and written back in full while the
	/// category's lock is held.
	pub async fn create(
		&self,
		category: Category,
		content: PostContent,
		author: &str,
	) -> Result<Post, StoreError> {
		let _guard = self.locks.get(category).lock().await;

		let created_at = Utc::now().timestamp_millis();
		let post = Post {
			id: format!("{}-{}", created_at, Uuid::new_v4().simple()),
			content: content.into_inner(),
			author: author.to_string(),
			created_at,
			category,
		};

		let mut posts = self.read_partition(category).await?;
		posts.insert(0, post.clone());
		self.write_partition(category, &posts).await?;

		tracing::debug!(category = %category, post_id = %post.id, partition_len = posts.len(), "post created");
		Ok(post)
	}

	pub async fn list(&self) -> Result<PostsByCategory, StoreError> {
		let (offer, request, resource) = tokio::try_join!(
			self.read_partition(Category::Offer),
			self.read_partition(Category::Request),
			self.read_partition(Category::Resource),
		)?;
		Ok(PostsByCategory { offer, request, resource })
	}

	/// Deletes every partition. Clearing an empty store succeeds.
	///
	/// All deletions are attempted; the first failure is reported even if
	/// other partitions were cleared.
	pub async fn clear(&self) -> Result<bool, StoreError> {
		let results = join_all(Category::ALL.into_iter().map(|category| async move {
			let _guard = self.locks.get(category).lock().await;
			let key = self.partition_key(category);
			self.with_timeout("del", &key, self.engine.del(&key)).await
		}))
		.await;

		results.into_iter().collect::<Result<Vec<_>, _>>()?;
		tracing::info!(namespace = %self.namespace, "all partitions cleared");
		Ok(true)
	}

	/// Absent partitions read as empty.
	pub(crate) async fn read_partition(
		&self,
		category: Category,
	) -> Result<Vec<Post>, StoreError> {
		let key = self.partition_key(category);
		match self.with_timeout("get", &key, self.engine.get(&key)).await? {
			None => Ok(Vec::new()),
			Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Codec { key, source }),
		}
	}

	async fn write_partition(
		&self,
		category: Category,
		posts: &[Post],
	) -> Result<(), StoreError> {
		let key = self.partition_key(category);
		let raw = serde_json::to_string(posts).map_err(|source| StoreError::Codec { key: key.clone(), source })?;
		self.with_timeout("set", &key, self.engine.set(&key, raw)).await
	}

	async fn with_timeout<T>(
		&self,
		operation: &'static str,
		key: &str,
		call: impl Future<Output = Result<T, EngineError>>,
	) -> Result<T, StoreError> {
		match tokio::time::timeout(self.engine_timeout, call).await {
			Ok(result) => result.map_err(StoreError::from),
			Err(_elapsed) => Err(StoreError::Timeout {
				operation,
				key: key.to_string(),
				after: self.engine_timeout,
			}),
		}
	}
}
