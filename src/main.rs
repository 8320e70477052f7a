use clap::Parser;
use safe_eat::core::config::{load_config, resolve};
use safe_eat::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "safe-eat", about = "SafeEat ordering client")]
struct Args {
    /// Base URL of the SafeEat API
    #[arg(long)]
    api_url: Option<String>,

    /// Product opened from the home menu
    #[arg(long)]
    product: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Read before the logger exists: the log file itself is configurable
    let loaded = load_config();
    let config = resolve(
        loaded.as_ref().unwrap_or(&Default::default()),
        args.api_url.as_deref(),
        args.product.as_deref(),
    );

    // File logger - stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Err(e) = &loaded {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "SafeEat starting up against {} (featured product {})",
        config.api_base_url,
        config.featured_product
    );

    tui::run(config)
}
