//! Path helpers for naming segment files and folders

use std::path::{Path, PathBuf};

use crate::error::{SegmuxError, SegmuxResult};

/// Literal suffix appended to the base name when deriving the default
/// segments folder.
const SEGMENTS_FOLDER_SUFFIX: &str = "-Segments";

/// Base name used for segment files and the derived folder: the input file
/// name with its last 4 characters (the expected `.mp4`-style extension)
/// stripped.
pub fn segment_base_name(input: &Path) -> SegmuxResult<String> {
    let name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| SegmuxError::InvalidInputFileName {
            path: input.display().to_string(),
        })?;

    let cut = name
        .char_indices()
        .rev()
        .nth(3)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    Ok(name[..cut].to_string())
}

/// Default segments folder: a sibling of the input named `<base>-Segments`.
pub fn derive_segments_folder(input: &Path, base_name: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{base_name}{SEGMENTS_FOLDER_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_last_four_characters() {
        assert_eq!(segment_base_name(Path::new("movie.mp4")).unwrap(), "movie");
        assert_eq!(
            segment_base_name(Path::new("/videos/a.b.mkv")).unwrap(),
            "a.b"
        );
    }

    #[test]
    fn base_name_of_short_name_is_empty() {
        assert_eq!(segment_base_name(Path::new("abc")).unwrap(), "");
    }

    #[test]
    fn base_name_rejects_path_without_file_name() {
        assert!(segment_base_name(Path::new("/")).is_err());
    }

    #[test]
    fn derived_folder_is_a_sibling_of_the_input() {
        let folder = derive_segments_folder(Path::new("/videos/movie.mp4"), "movie");
        assert_eq!(folder, PathBuf::from("/videos/movie-Segments"));
    }

    #[test]
    fn derived_folder_for_bare_file_name_is_relative() {
        let folder = derive_segments_folder(Path::new("movie.mp4"), "movie");
        assert_eq!(folder, PathBuf::from("movie-Segments"));
    }
}
