use anyhow::{Context, Result};
use clap::Parser;
use spotify_current_track::config::loader::file_to_config;
use spotify_current_track::config::settings::{ClientConfig, LogFormat, LoggingConfig};
use spotify_current_track::utils::logging::{self, LogLevel};
use spotify_current_track::SpotifyClient;
use std::path::Path;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config; SPOTIFY_* environment variables are used when absent
    #[arg(short, long, env = "CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Two-letter country code passed as `market`
    #[arg(short, long, env = "SPOTIFY_MARKET")]
    market: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load config
    // -------------------------------

    let args = Args::parse();
    let (client_config, logging_config) = match &args.config {
        Some(path) => {
            let app_config = file_to_config(Path::new(path))?;
            (app_config.spotify, app_config.logging)
        }
        None => (
            ClientConfig::from_env().context("failed to read SPOTIFY_* environment")?,
            Some(LoggingConfig::new("warn".to_owned(), LogFormat::from_env())),
        ),
    };
    logging::init_logging(&logging::resolve(
        logging_config.as_ref(),
        args.log_level,
        client_config.verbose,
    ));

    // -------------------------------
    // 2. Create client
    // -------------------------------

    let client = SpotifyClient::new(client_config)?;
    if let Some(market) = &args.market {
        client.set_market(market).await;
    }

    // -------------------------------
    // 3. Fetch and print
    // -------------------------------

    let track = client.current_track().await.inspect_err(|e| error!("{}", e))?;
    info!(is_playing = track.is_playing, "current track fetched");
    println!("{}", serde_json::to_string_pretty(&track)?);

    Ok(())
}
