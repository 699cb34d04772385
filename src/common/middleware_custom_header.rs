use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::bootstrap::AppState;

/// Per-request values supplied by the hosting platform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Identifier of the hosted entry point the request belongs to.
    pub scope_id: Option<String>,
    pub username: Option<String>,
}

/// Header names the hosting platform uses for [`RequestContext`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextHeaders {
    pub scope: String,
    pub username: String,
}

impl Default for ContextHeaders {
    fn default() -> Self {
        Self {
            scope: "x-scope-id".to_string(),
            username: "x-username".to_string(),
        }
    }
}

impl RequestContext {
    pub fn from_headers(headers: &HeaderMap, names: &ContextHeaders) -> Self {
        Self {
            scope_id: non_empty_header(headers, &names.scope),
            username: non_empty_header(headers, &names.username),
        }
    }
}

fn non_empty_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Missing headers are left as `None`; handlers decide whether that is an error.
pub async fn set_request_context<B>(State(state): State<AppState>, mut request: Request<B>, next: Next<B>) -> Response {
    let context = RequestContext::from_headers(request.headers(), &state.context_headers);

    let extensions = request.extensions_mut();
    extensions.insert(context);

    next.run(request).await
}
