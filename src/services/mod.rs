pub mod handlers;
pub mod identity;
pub mod response;
