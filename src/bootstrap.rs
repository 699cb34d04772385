use std::sync::Arc;

use crate::{
	adapters::{
		engine::{EngineError, KeyValueEngine},
		repositories::PostRepository,
	},
	common::middleware_custom_header::ContextHeaders,
	config::Config,
	dependencies,
	services::identity::{HeaderIdentity, IdentityProvider},
};

/// Shared by every request handler. Holds no post data.
#[derive(Clone)]
pub struct AppState {
	pub repository: PostRepository,
	pub identity: Arc<dyn IdentityProvider>,
	pub context_headers: ContextHeaders,
}

impl AppState {
	pub fn new(
		engine: Arc<dyn KeyValueEngine>,
		identity: Arc<dyn IdentityProvider>,
		config: &Config,
	) -> Self {
		Self {
			repository: PostRepository::new(engine, &config.key_namespace, config.engine_timeout),
			identity,
			context_headers: config.context_headers.clone(),
		}
	}
}

pub struct Bootstrap;
impl Bootstrap {
	pub async fn app_state(config: &Config) -> Result<AppState, EngineError> {
		let engine = dependencies::engine(config).await?;
		Ok(AppState::new(engine, Arc::new(HeaderIdentity), config))
	}
}
