//! SegMux CLI Video Splitter Library
//!
//! A thin orchestration layer around an external ffmpeg binary: argument
//! parsing, path validation, concat-manifest generation, and subprocess
//! invocation. No media processing happens in-process.

pub mod cli;
pub mod engine;
pub mod error;
pub mod exec;
pub mod utils;

// Re-export commonly used types
pub use engine::{JoinRequest, SplitRequest};
pub use error::{SegmuxError, SegmuxResult};
pub use exec::ProcessRunner;
