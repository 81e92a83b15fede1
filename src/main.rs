use clap::Parser;

use rust_passgen::cli::{self, Args};
use rust_passgen::core::Config;
use rust_passgen::logging;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    config.log_warnings();
    log::info!("Starting rust_passgen");
    log::debug!("Loaded config: {:?}", config);

    cli::run(args, &config).map_err(|e| {
        log::error!("{:#}", e);
        e
    })
}
