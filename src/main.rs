use clap::Parser;
use tracing::{error, info};

use txwatch::adapter::inbound::cli::command::{Cli, Commands};
use txwatch::adapter::inbound::cli::{run, watch};
use txwatch::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    match &config.source {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!(path = %cli.config.display(), "Config file not found, using defaults"),
    }
    info!("txwatch starting");

    let code = match cli.command {
        Commands::Run => match run::execute(config).await {
            Ok(()) => 0,
            Err(e) => {
                error!(error = %e, "Fatal error");
                1
            }
        },
        Commands::Watch(args) => match watch::execute(&config, &args).await {
            Ok(state) => {
                info!(state = %state, "Watch finished");
                watch::exit_code(state)
            }
            Err(e) => {
                error!(error = %e, "Watch failed");
                1
            }
        },
    };

    info!("txwatch stopped");
    std::process::exit(code);
}
