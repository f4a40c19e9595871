//! Command implementations
//!
//! Missing options are reported directly to the user and never logged.
//! Pipeline failures are logged and reported with a generic message; the
//! process still exits normally in both cases.

use anyhow::Result;
use tracing::{error, info};

use crate::cli::args::{JoinArgs, SplitArgs};
use crate::engine::{JoinRequest, SplitRequest};
use crate::exec::ProcessRunner;

/// Execute the split command
pub fn split(args: SplitArgs) -> Result<()> {
    let Some(input_video_file) = args.input_video_file else {
        println!("Input video file must be a file path.");
        return Ok(());
    };

    info!("Starting split operation");
    info!("Input: {}", input_video_file.display());

    let request = SplitRequest::new(input_video_file, args.segments_folder);
    let outcome = ProcessRunner::from_current_dir().and_then(|runner| request.execute(&runner));

    if let Err(e) = outcome {
        error!("{}", e);
        println!("Error while trying to split the video. Please review the logs.");
        return Ok(());
    }

    info!("Split operation completed successfully");
    Ok(())
}

/// Execute the join command
pub fn join(args: JoinArgs) -> Result<()> {
    let Some(segments_folder) = args.segments_folder else {
        println!("The segments folder must be a folder path.");
        return Ok(());
    };

    let Some(output_video_file) = args.output_video_file else {
        println!("The output video file must be a file path.");
        return Ok(());
    };

    info!("Starting join operation");
    info!("Segments folder: {}", segments_folder.display());
    info!("Output: {}", output_video_file.display());

    let request = JoinRequest::new(segments_folder, output_video_file);
    let outcome = ProcessRunner::from_current_dir().and_then(|runner| request.execute(&runner));

    if let Err(e) = outcome {
        error!("{}", e);
        println!("Error while trying to join video segments into a single video. Please review the logs.");
        return Ok(());
    }

    info!("Join operation completed successfully");
    Ok(())
}
