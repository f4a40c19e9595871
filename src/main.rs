//! SegMux CLI Video Splitter
//!
//! A command-line tool that splits large videos into fixed-duration,
//! stream-copied segments and joins such segments back into a single video,
//! delegating the media work to an external ffmpeg binary.
//!
//! # Usage
//!
//! ```bash
//! segmux split --input-video-file "movie.mp4"
//! segmux split --input-video-file "movie.mp4" --segments-folder "parts"
//! segmux join --segments-folder "movie-Segments" --output-video-file "joined.mp4"
//! ```

use std::fs;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use segmux_cli::cli::{commands, Cli, Commands};

/// Directory the rolling log file is written to.
const LOG_DIR: &str = "logs";

/// Main entry point for the SegMux CLI application
fn main() -> Result<()> {
    // Initialize logging: daily-rolling file sink at logs/app.log
    fs::create_dir_all(LOG_DIR)?;
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, "app.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute the requested command
    match cli.command {
        Commands::Split(args) => {
            info!("Executing split command");
            commands::split(args)?;
        }
        Commands::Join(args) => {
            info!("Executing join command");
            commands::join(args)?;
        }
    }

    Ok(())
}
