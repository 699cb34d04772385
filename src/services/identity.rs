use async_trait::async_trait;

use crate::common::middleware_custom_header::RequestContext;

#[derive(Debug, thiserror::Error)]
#[error("identity service unavailable: {0}")]
pub struct IdentityError(pub String);

/// Resolves the display name of the caller.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
	/// `None` when the platform has no identity for the caller.
	async fn current_username(
		&self,
		context: &RequestContext,
	) -> Result<Option<String>, IdentityError>;
}

/// Trusts the username the hosting platform forwarded in the request headers.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderIdentity;

#[async_trait]
impl IdentityProvider for HeaderIdentity {
	async fn current_username(
		&self,
		context: &RequestContext,
	) -> Result<Option<String>, IdentityError> {
		Ok(context.username.clone())
	}
}
