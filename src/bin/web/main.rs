use std::{error::Error, net::SocketAddr, str::FromStr};

use community_help::{bootstrap::Bootstrap, dependencies::config};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	// ! Configuration
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},community_help=debug,tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Store
	tracing::info!("Key-value engine is being connected...");
	let state = Bootstrap::app_state(config).await?;

	let app = community_help::app(state, config)?;

	let addr = SocketAddr::from_str(&config.server_ip_port)?;
	tracing::info!("Start Web Server on {}", addr);
	axum::Server::bind(&addr).serve(app.into_make_service()).await?;

	Ok(())
}
