//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// The path to the video file to split into segments
    #[arg(long)]
    pub input_video_file: Option<PathBuf>,

    /// The folder to create and output video segments to. The folder must not exist
    #[arg(long)]
    pub segments_folder: Option<PathBuf>,
}

/// Arguments for the join command
#[derive(Args, Debug)]
pub struct JoinArgs {
    /// The folder which contains the segments of the video to be joined together
    #[arg(long)]
    pub segments_folder: Option<PathBuf>,

    /// The file to which the joined video will be saved. Must not exist
    #[arg(long)]
    pub output_video_file: Option<PathBuf>,
}
