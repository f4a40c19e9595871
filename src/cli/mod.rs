//! CLI module for SegMux
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// SegMux CLI Video Splitter
///
/// Splits large videos into segments and joins the segments of large videos
/// into a single video.
#[derive(Parser)]
#[command(name = "segmux")]
#[command(about = "Splits large videos into segments and joins the segments back into a single video")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Split a video file into fixed-duration segments
    Split(args::SplitArgs),
    /// Join video segments into a single video file
    Join(args::JoinArgs),
}
