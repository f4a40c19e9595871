//! Error handling module for SegMux

use thiserror::Error;

/// Main error type for SegMux operations
#[derive(Error, Debug)]
pub enum SegmuxError {
    /// Input file not found on disk
    #[error("Input video file does not exist: {path}")]
    InputFileNotFound { path: String },

    /// Input path has no usable file name component
    #[error("Input video file path has no file name: {path}")]
    InvalidInputFileName { path: String },

    /// Refusing to write segments into a pre-existing folder
    #[error("Segments folder should not exist: {path}")]
    SegmentsFolderExists { path: String },

    /// Segments folder missing for a join
    #[error("Video segments folder must exist: {path}")]
    SegmentsFolderNotFound { path: String },

    /// Refusing to overwrite an existing output file
    #[error("Output video file must not exist: {path}")]
    OutputFileExists { path: String },

    /// The external tool could not be started
    #[error("Failed to start {executable}: {source}")]
    SpawnFailed {
        executable: String,
        source: std::io::Error,
    },

    /// The external tool exited with a failure status
    #[error("ffmpeg exited unsuccessfully: {status}")]
    ToolFailed { status: std::process::ExitStatus },

    /// Error while listing the segments folder
    #[error("Failed to read segments folder: {0}")]
    Walk(#[from] walkdir::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SegMux operations
pub type SegmuxResult<T> = std::result::Result<T, SegmuxError>;
