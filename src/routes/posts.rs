use axum::{
	extract::{rejection::JsonRejection, State},
	Extension, Json,
};

use crate::{
	bootstrap::AppState,
	common::middleware_custom_header::RequestContext,
	services::{
		handlers::{CreatePostRequest, PostHandler},
		response::{ServiceError, ServiceResponse},
	},
};

pub async fn init(
	State(state): State<AppState>,
	Extension(context): Extension<RequestContext>,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::init(&context, &state).await
}

pub async fn create_post(
	State(state): State<AppState>,
	Extension(context): Extension<RequestContext>,
	body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<ServiceResponse, ServiceError> {
	let Json(request) = body.map_err(|rejection| {
		tracing::debug!("Rejected create post body : {}", rejection);
		ServiceError::MalformedBody
	})?;
	PostHandler::create_post(&context, &state, request).await
}

pub async fn get_posts(
	State(state): State<AppState>,
	Extension(context): Extension<RequestContext>,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::get_posts(&context, &state).await
}

pub async fn clear_posts(
	State(state): State<AppState>,
	Extension(context): Extension<RequestContext>,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::clear_posts(&context, &state).await
}
