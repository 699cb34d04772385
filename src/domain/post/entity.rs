use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Author recorded when the hosting platform has no identity for the caller.
pub const ANONYMOUS: &str = "anonymous";

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    #[serde(rename = "username")]
    pub author: String,
    #[serde(rename = "createdAt", alias = "timestamp")]
    pub created_at: i64,
    #[serde(rename = "type")]
    pub category: Category,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Offer,
    Request,
    Resource,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Offer, Category::Request, Category::Resource];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Offer => "offer",
            Category::Request => "request",
            Category::Resource => "resource",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offer" => Ok(Category::Offer),
            "request" => Ok(Category::Request),
            "resource" => Ok(Category::Resource),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
