//! Split pipeline: cut a video into fixed-length, stream-copied segments.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::{SegmuxError, SegmuxResult};
use crate::exec::ProcessRunner;
use crate::utils::path::{derive_segments_folder, segment_base_name};

/// Wall-clock duration of each segment, in seconds.
const SEGMENT_TIME: &str = "600";

/// A request to split one input video into segments.
#[derive(Debug)]
pub struct SplitRequest {
    input_video_file: PathBuf,
    segments_folder: Option<PathBuf>,
}

impl SplitRequest {
    /// Create a split request. The segments folder is derived from the
    /// input file name when not supplied.
    pub fn new(input_video_file: PathBuf, segments_folder: Option<PathBuf>) -> Self {
        Self {
            input_video_file,
            segments_folder,
        }
    }

    /// Run the split pipeline: validate the input, create the segments
    /// folder, and invoke the external tool with stderr capture enabled.
    ///
    /// Segments are written as `<folder>/<base>-NNN.mp4` with a zero-padded
    /// index starting at 000, each independently playable from time zero.
    pub fn execute(&self, runner: &ProcessRunner) -> SegmuxResult<()> {
        if !self.input_video_file.is_file() {
            return Err(SegmuxError::InputFileNotFound {
                path: self.input_video_file.display().to_string(),
            });
        }

        let base_name = segment_base_name(&self.input_video_file)?;

        let segments_folder = match &self.segments_folder {
            Some(folder) => folder.clone(),
            None => derive_segments_folder(&self.input_video_file, &base_name),
        };

        // Refuse to write into a pre-existing directory
        if segments_folder.exists() {
            return Err(SegmuxError::SegmentsFolderExists {
                path: segments_folder.display().to_string(),
            });
        }

        fs::create_dir_all(&segments_folder)?;

        let segment_pattern = segments_folder.join(format!("{base_name}-%03d.mp4"));

        let args: Vec<OsString> = vec![
            OsString::from("-i"),
            self.input_video_file.clone().into_os_string(),
            OsString::from("-c"),
            OsString::from("copy"),
            OsString::from("-f"),
            OsString::from("segment"),
            OsString::from("-segment_time"),
            OsString::from(SEGMENT_TIME),
            OsString::from("-reset_timestamps"),
            OsString::from("1"),
            segment_pattern.into_os_string(),
        ];

        info!(
            "Splitting {} into {}s segments under {}",
            self.input_video_file.display(),
            SEGMENT_TIME,
            segments_folder.display()
        );

        let status = runner.run(&args, true)?;
        if !status.success() {
            return Err(SegmuxError::ToolFailed { status });
        }

        Ok(())
    }
}
