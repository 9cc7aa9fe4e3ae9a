// SPDX-License-Identifier: MPL-2.0
//! The photo model: an ordered sequence element with a title and an image
//! source. Photos are immutable once handed to the browser; identity is the
//! index in the sequence.

use std::path::{Path, PathBuf};

/// A single photo supplied to the browser by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    source: PathBuf,
    title: Option<String>,
}

impl Photo {
    /// Creates a photo from an image file path with no explicit title.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            title: None,
        }
    }

    /// Sets an explicit title, replacing the file-name fallback.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Path to the image file backing this photo.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Explicit title, if one was supplied.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title shown in the header bar: the explicit title when present,
    /// otherwise the source file stem, otherwise empty.
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_title_wins_over_file_stem() {
        let photo = Photo::new("/photos/beach.jpg").with_title("Holiday");
        assert_eq!(photo.display_title(), "Holiday");
        assert_eq!(photo.title(), Some("Holiday"));
    }

    #[test]
    fn display_title_falls_back_to_file_stem() {
        let photo = Photo::new("/photos/beach.jpg");
        assert_eq!(photo.display_title(), "beach");
        assert_eq!(photo.title(), None);
    }

    #[test]
    fn display_title_is_empty_without_stem() {
        let photo = Photo::new("/");
        assert_eq!(photo.display_title(), "");
    }
}
