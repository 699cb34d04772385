use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::post::entity::Post;
use crate::domain::post::{PostsByCategory, CONTENT_CHARS_MAX};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServiceResponse {
    #[serde(rename = "init")]
    Init {
        #[serde(rename = "postId")]
        post_id: String,
        username: String,
        posts: PostsByCategory,
    },
    #[serde(rename = "createPost")]
    CreatePost { post: Post },
    #[serde(rename = "getPosts")]
    GetPosts { posts: PostsByCategory },
    #[serde(rename = "clearPosts")]
    ClearPosts { success: bool },
}

impl IntoResponse for ServiceResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Operation a dependency failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Init,
    CreatePost,
    GetPosts,
    ClearPosts,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Init => write!(f, "init"),
            Operation::CreatePost => write!(f, "createPost"),
            Operation::GetPosts => write!(f, "getPosts"),
            Operation::ClearPosts => write!(f, "clearPosts"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("postId is required")]
    MissingScope,
    #[error("Request body must be a JSON object with content and type")]
    MalformedBody,
    #[error("type must be one of offer, request, resource")]
    InvalidCategory,
    #[error("content must not be empty")]
    EmptyContent,
    #[error("content must be at most {} characters", CONTENT_CHARS_MAX)]
    ContentTooLong,
    /// Engine or identity failure. The cause is logged, never returned.
    #[error("{}", dependency_message(.0))]
    Dependency(Operation),
}

fn dependency_message(operation: &Operation) -> &'static str {
    match operation {
        Operation::Init => "Initialization failed",
        Operation::CreatePost => "Failed to create post",
        Operation::GetPosts => "Failed to get posts",
        Operation::ClearPosts => "Failed to clear posts",
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Dependency(Operation::Init) => StatusCode::BAD_REQUEST,
            ServiceError::Dependency(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: "error".to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
