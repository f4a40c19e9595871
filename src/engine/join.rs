//! Join pipeline: concatenate segments back into a single video.
//!
//! Builds an ordered concat manifest from the `.mp4` files directly inside
//! the segments folder and feeds it to the external tool's concat demuxer
//! with stream copy. Ordering is a plain lexicographic sort: the split
//! pipeline's zero-padded 3-digit suffixes keep that equal to chronological
//! order for up to 999 segments.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::{SegmuxError, SegmuxResult};
use crate::exec::ProcessRunner;

/// File name of the transient concat manifest written into the segments folder.
pub const MANIFEST_FILE_NAME: &str = "list.txt";

/// Lexicographic order stops matching chronological order at this count.
const MAX_ORDERED_SEGMENTS: usize = 1000;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// A request to join the segments of one folder into a single output file.
#[derive(Debug)]
pub struct JoinRequest {
    segments_folder: PathBuf,
    output_video_file: PathBuf,
}

impl JoinRequest {
    /// Create a join request.
    pub fn new(segments_folder: PathBuf, output_video_file: PathBuf) -> Self {
        Self {
            segments_folder,
            output_video_file,
        }
    }

    /// Run the join pipeline: validate, write the concat manifest, and
    /// invoke the external tool. Stderr capture stays disabled here; the
    /// tool inherits the process's own stderr stream.
    pub fn execute(&self, runner: &ProcessRunner) -> SegmuxResult<()> {
        if !self.segments_folder.is_dir() {
            return Err(SegmuxError::SegmentsFolderNotFound {
                path: self.segments_folder.display().to_string(),
            });
        }

        // Refuse to overwrite; checked before the manifest is written so a
        // failed request leaves the folder untouched
        if self.output_video_file.exists() {
            return Err(SegmuxError::OutputFileExists {
                path: self.output_video_file.display().to_string(),
            });
        }

        let directives = manifest_directives(list_segment_files(&self.segments_folder)?);

        if directives.len() >= MAX_ORDERED_SEGMENTS {
            warn!(
                "{} segments found; lexicographic ordering is only guaranteed below {}",
                directives.len(),
                MAX_ORDERED_SEGMENTS
            );
        }

        let manifest_path = self.segments_folder.join(MANIFEST_FILE_NAME);
        fs::write(&manifest_path, directives.join(LINE_ENDING))?;

        info!(
            "Wrote concat manifest with {} segments to {}",
            directives.len(),
            manifest_path.display()
        );

        let args: Vec<OsString> = vec![
            OsString::from("-f"),
            OsString::from("concat"),
            OsString::from("-i"),
            manifest_path.into_os_string(),
            OsString::from("-c"),
            OsString::from("copy"),
            self.output_video_file.clone().into_os_string(),
        ];

        info!("Joining segments into {}", self.output_video_file.display());

        let status = runner.run(&args, false)?;
        if !status.success() {
            return Err(SegmuxError::ToolFailed { status });
        }

        Ok(())
    }
}

/// List the names of the `.mp4` files directly inside the segments folder.
pub(crate) fn list_segment_files(folder: &Path) -> SegmuxResult<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(".mp4") {
            names.push(name.into_owned());
        }
    }

    Ok(names)
}

/// Wrap each segment name as a `file '<name>'` directive and sort the
/// directive lines lexicographically.
pub(crate) fn manifest_directives(names: Vec<String>) -> Vec<String> {
    let mut lines: Vec<String> = names
        .into_iter()
        .map(|name| format!("file '{name}'"))
        .collect();
    lines.sort();
    lines
}
