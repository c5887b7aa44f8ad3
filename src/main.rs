//! Roster client page snapshot
//!
//! Runs the page-ready handler against the configured roster service and
//! prints the resulting page markup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roster_client::config::{Config, LogFormat};
use roster_client::{HttpRosterApi, RosterApp};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let json = config.log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    tracing::info!("Starting roster client");
    tracing::info!("API base URL: {}", config.api_base_url);

    let api = HttpRosterApi::new(config.api_base_url.clone())?;
    let app = RosterApp::new(api);

    app.on_ready().await;

    println!("{}", app.page_html().await?);

    Ok(())
}
