mod posts;

use axum::{
	middleware,
	routing::{get, post},
	Router,
};

use crate::{bootstrap::AppState, common::middleware_custom_header::set_request_context};

pub fn create_routes(state: AppState) -> Router {
	Router::new()
		.route("/api/init", get(posts::init))
		.route("/api/posts", get(posts::get_posts).post(posts::create_post))
		.route("/api/clear", post(posts::clear_posts))
		.layer(middleware::from_fn_with_state(state.clone(), set_request_context))
		.with_state(state)
}
