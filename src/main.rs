// src/main.rs
mod cli;

use clap::Parser;
use cli::Args;
use roast_previews::config::Config;
use roast_previews::error::AppError;
use roast_previews::{logging, pipeline};
use tracing::{error, info};

/// Layers command line values over the loaded configuration.
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(league_id) = &args.league_id {
        config.league_id = league_id.clone();
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).await?;
    apply_cli_overrides(&mut config, &args);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = logging::setup_logging(&config).await?;
    info!("Logs are being written to: {log_file_path}");

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        return Err(e);
    }

    match pipeline::run(&config).await {
        Ok(summary) => {
            info!(
                "Week {} of '{}': {} previews generated at {}",
                summary.week, summary.league_name, summary.total_previews, summary.generated_at
            );
            Ok(())
        }
        Err(e) => {
            error!("Run failed: {e}");
            Err(e)
        }
    }
}
