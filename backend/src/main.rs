//! Farm Records - interactive console
//!
//! Keeps records for one farm in memory for the lifetime of the process.

use farm_records_backend::{Config, Console, FarmService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing on stderr so it never interleaves with the menus
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting Farm Records console");
    tracing::info!("Environment: {}", config.environment);

    let mut service = FarmService::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(&mut service, stdin.lock(), stdout.lock(), config.console.clone()).run()?;

    let stats = service.statistics();
    tracing::info!(
        crops = stats.total_crops,
        livestock = stats.total_livestock,
        fields = stats.total_fields,
        harvests = stats.total_harvests,
        inventory_items = stats.total_inventory_items,
        "Console session ended"
    );
    Ok(())
}
