use std::time::Duration;

use crate::common::middleware_custom_header::ContextHeaders;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{name} must be a positive integer, got `{value}`")]
	InvalidNumber { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub allow_origins: Vec<String>,

	/// Postgres-backed engine when set, in-memory engine otherwise
	pub database_url: Option<String>,
	pub database_max_connections: u32,

	/// Prefix of every partition key
	pub key_namespace: String,
	pub engine_timeout: Duration,

	pub context_headers: ContextHeaders,
}

impl Config {
	pub fn new() -> Result<Config, ConfigError> {
		dotenv::dotenv().ok();
		Self::from_vars(|name| std::env::var(name).ok())
	}

	pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
		let log_level = var("LOG_LEVEL").unwrap_or("warn".to_string());
		let server_ip_port = var("SERVER_IP_PORT").unwrap_or("0.0.0.0:80".into());
		let allow_origins = var("ALLOW_ORIGINS")
			.unwrap_or("http://localhost:3000".to_string())
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(str::to_owned)
			.collect();
		let database_url = var("DATABASE_URL").filter(|url| !url.trim().is_empty());
		let database_max_connections = positive("DATABASE_MAX_CONNECTIONS", var("DATABASE_MAX_CONNECTIONS"), 30)? as u32;
		let key_namespace = var("KEY_NAMESPACE").unwrap_or("posts".to_string());
		let engine_timeout = Duration::from_millis(positive("ENGINE_TIMEOUT_MS", var("ENGINE_TIMEOUT_MS"), 5_000)?);

		let defaults = ContextHeaders::default();
		let context_headers = ContextHeaders {
			scope: var("SCOPE_HEADER").unwrap_or(defaults.scope).to_ascii_lowercase(),
			username: var("USERNAME_HEADER").unwrap_or(defaults.username).to_ascii_lowercase(),
		};

		Ok(Config {
			log_level,
			server_ip_port,
			allow_origins,
			database_url,
			database_max_connections,
			key_namespace,
			engine_timeout,
			context_headers,
		})
	}
}

fn positive(
	name: &'static str,
	value: Option<String>,
	default: u64,
) -> Result<u64, ConfigError> {
	match value {
		None => Ok(default),
		Some(value) => match value.trim().parse::<u64>() {
			Ok(parsed) if parsed > 0 && parsed <= u32::MAX as u64 => Ok(parsed),
			_ => Err(ConfigError::InvalidNumber { name, value }),
		},
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::*;

	fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
		let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		Config::from_vars(|name| vars.get(name).cloned())
	}

	#[test]
	fn test_defaults() {
		let config = config_from(&[]).unwrap();
		assert_eq!(config.server_ip_port, "0.0.0.0:80");
		assert_eq!(config.log_level, "warn");
		assert_eq!(config.allow_origins, vec!["http://localhost:3000".to_string()]);
		assert_eq!(config.database_url, None);
		assert_eq!(config.key_namespace, "posts");
		assert_eq!(config.engine_timeout, Duration::from_secs(5));
		assert_eq!(config.context_headers, ContextHeaders::default());
	}

	#[test]
	fn test_overrides() {
		let config = config_from(&[
			("ALLOW_ORIGINS", "http://localhost:3000, https://example.org ,"),
			("DATABASE_URL", "postgres://localhost/help"),
			("ENGINE_TIMEOUT_MS", "250"),
			("KEY_NAMESPACE", "t3_abc"),
			("SCOPE_HEADER", "Devvit-Post"),
		])
		.unwrap();
		assert_eq!(config.allow_origins, vec!["http://localhost:3000".to_string(), "https://example.org".to_string()]);
		assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/help"));
		assert_eq!(config.engine_timeout, Duration::from_millis(250));
		assert_eq!(config.key_namespace, "t3_abc");
		assert_eq!(config.context_headers.scope, "devvit-post");
	}

	#[test]
	fn test_invalid_numbers_are_rejected() {
		assert!(matches!(
			config_from(&[("ENGINE_TIMEOUT_MS", "soon")]),
			Err(ConfigError::InvalidNumber { name: "ENGINE_TIMEOUT_MS", .. })
		));
		assert!(config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
	}

	#[test]
	fn test_blank_database_url_means_memory_engine() {
		let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
		assert_eq!(config.database_url, None);
	}
}
