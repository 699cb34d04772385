use serde::Deserialize;

use crate::{
	bootstrap::AppState,
	common::middleware_custom_header::RequestContext,
	domain::post::{
		entity::{Category, ANONYMOUS},
		ContentError, PostContent,
	},
};

use super::response::{Operation, ServiceError, ServiceResponse};

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
	#[serde(default)]
	pub content: Option<String>,
	#[serde(default, rename = "type")]
	pub category: Option<String>,
}

/// Validates requests, delegates to the post store and shapes the reply.
///
/// Nothing is retried: a failed store or identity call fails that request.
pub struct PostHandler;
impl PostHandler {
	pub async fn init(
		context: &RequestContext,
		state: &AppState,
	) -> Result<ServiceResponse, ServiceError> {
		let scope = PostHandler::scope(context, Operation::Init)?;

		let (username, posts) = tokio::try_join!(
			async {
				state.identity.current_username(context).await.map_err(|err| {
					tracing::error!(scope, operation = %Operation::Init, "Identity lookup failed : {}", err);
					ServiceError::Dependency(Operation::Init)
				})
			},
			async {
				state.repository.list().await.map_err(|err| {
					tracing::error!(scope, operation = %Operation::Init, "Loading posts failed : {}", err);
					ServiceError::Dependency(Operation::Init)
				})
			},
		)?;

		Ok(ServiceResponse::Init {
			post_id: scope.to_string(),
			username: username.unwrap_or_else(|| ANONYMOUS.to_string()),
			posts,
		})
	}

	pub async fn create_post(
		context: &RequestContext,
		state: &AppState,
		request: CreatePostRequest,
	) -> Result<ServiceResponse, ServiceError> {
		let scope = PostHandler::scope(context, Operation::CreatePost)?;

		let category = request
			.category
			.as_deref()
			.and_then(|raw| raw.parse::<Category>().ok())
			.ok_or(ServiceError::InvalidCategory)?;
		let content = PostContent::parse(request.content.as_deref().unwrap_or_default()).map_err(|err| match err {
			ContentError::Empty => ServiceError::EmptyContent,
			ContentError::TooLong { .. } => ServiceError::ContentTooLong,
		})?;

		let author = state
			.identity
			.current_username(context)
			.await
			.map_err(|err| {
				tracing::error!(scope, operation = %Operation::CreatePost, "Identity lookup failed : {}", err);
				ServiceError::Dependency(Operation::CreatePost)
			})?
			.unwrap_or_else(|| ANONYMOUS.to_string());

		let post = state.repository.create(category, content, &author).await.map_err(|err| {
			tracing::error!(scope, operation = %Operation::CreatePost, %category, "Store failure : {}", err);
			ServiceError::Dependency(Operation::CreatePost)
		})?;

		tracing::info!(scope, post_id = %post.id, %category, "Post created");
		Ok(ServiceResponse::CreatePost { post })
	}

	pub async fn get_posts(
		context: &RequestContext,
		state: &AppState,
	) -> Result<ServiceResponse, ServiceError> {
		let scope = PostHandler::scope(context, Operation::GetPosts)?;

		let posts = state.repository.list().await.map_err(|err| {
			tracing::error!(scope, operation = %Operation::GetPosts, "Store failure : {}", err);
			ServiceError::Dependency(Operation::GetPosts)
		})?;
		Ok(ServiceResponse::GetPosts { posts })
	}

	pub async fn clear_posts(
		context: &RequestContext,
		state: &AppState,
	) -> Result<ServiceResponse, ServiceError> {
		let scope = PostHandler::scope(context, Operation::ClearPosts)?;

		let success = state.repository.clear().await.map_err(|err| {
			tracing::error!(scope, operation = %Operation::ClearPosts, "Store failure : {}", err);
			ServiceError::Dependency(Operation::ClearPosts)
		})?;

		tracing::info!(scope, "Posts cleared");
		Ok(ServiceResponse::ClearPosts { success })
	}

	fn scope(
		context: &RequestContext,
		operation: Operation,
	) -> Result<&str, ServiceError> {
		context.scope_id.as_deref().ok_or_else(|| {
			tracing::warn!(%operation, "Scope identifier missing from request context");
			ServiceError::MissingScope
		})
	}
}
