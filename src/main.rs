// src/main.rs
mod animation;
mod app;
mod cli;
mod config;
mod constants;
mod display;
mod error;
mod logging;

use clap::Parser;
use cli::Args;
use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations before taking over the terminal
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if args.new_icon_path.is_some()
        || args.new_track_path.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
    {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_icon) = args.new_icon_path.clone() {
            config.icon_path = new_icon;
        }

        if let Some(new_track) = args.new_track_path.clone() {
            config.track_path = new_track;
        }

        if let Some(new_log_path) = args.new_log_file_path.clone() {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;

    // Per-run CLI overrides take precedence over config and environment
    if let Some(icon) = args.icon.clone() {
        config.icon_path = icon;
    }
    if let Some(track) = args.track.clone() {
        config.track_path = track;
    }
    if let Some(fps) = args.fps {
        config.frame_rate = fps;
    }
    config.validate()?;

    app::run(&args, &config).await
}
