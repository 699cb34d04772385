pub mod engine;
pub mod repositories;
