use std::env;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use swift_search::config::AppConfig;
use swift_search::service::controller::RepoListController;
use swift_search::service::search::HttpPayloadSource;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let offset = match env::args().nth(1) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("scroll offset must be a row number, got {raw:?}"))?,
        None => 0,
    };

    info!("Initializing search client...");
    let source = HttpPayloadSource::new(&config)?;
    let mut controller = RepoListController::new(source, config.viewport_rows);

    controller.activate().await;
    if offset > 0 {
        controller.scroll_to(offset);
    }

    for line in controller.frame() {
        println!("{line}");
    }

    Ok(())
}
