use std::ops::Deref;

use serde::{Deserialize, Serialize};

use self::entity::Post;
pub mod entity;

/// Maximum content length, counted in characters after trimming.
pub const CONTENT_CHARS_MAX: usize = 280;

#[derive(Debug, PartialEq, Eq)]
pub enum ContentError {
	Empty,
	TooLong { chars: usize },
}

/// Post body that has already been trimmed and length-checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
	pub fn parse(raw: &str) -> Result<Self, ContentError> {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			return Err(ContentError::Empty);
		}
		let chars = trimmed.chars().count();
		if chars > CONTENT_CHARS_MAX {
			return Err(ContentError::TooLong { chars });
		}
		Ok(Self(trimmed.to_string()))
	}

	pub fn into_inner(self) -> String {
		self.0
	}
}

impl Deref for PostContent {
	type Target = str;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// All three partitions, each most-recent-first.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsByCategory {
	pub offer: Vec<Post>,
	pub request: Vec<Post>,
	pub resource: Vec<Post>,
}

impl PostsByCategory {
	pub fn is_empty(&self) -> bool {
		self.offer.is_empty() && self.request.is_empty() && self.resource.is_empty()
	}
}
