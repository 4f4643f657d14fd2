//! Data model for file entries parsed from slash-separated paths.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FileError, FileResult};

// =============================================================================
// FILE ENTRY
// =============================================================================

/// A file path split into its file name and extension.
///
/// `name` and `ext` start out empty and are filled in by
/// [`parse_name`](FileEntry::parse_name) and [`parse_ext`](FileEntry::parse_ext),
/// in that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    /// Slash-separated path, e.g. "styles/main.css".
    pub path: String,

    /// Last path segment, e.g. "main.css".
    pub name: String,

    /// Text after the last dot of the name, e.g. "css".
    pub ext: String,
}

impl FileEntry {
    /// Creates an unparsed entry for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Creates an entry and parses its name and extension.
    pub fn parse(path: impl Into<String>) -> FileResult<Self> {
        let mut entry = Self::new(path);
        entry.parse_name();
        entry.parse_ext();
        entry.validate()?;
        Ok(entry)
    }

    /// Builder: Set name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: Set extension.
    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    /// Sets `name` to the last `/`-separated segment of the path.
    pub fn parse_name(&mut self) {
        self.name = match self.path.rsplit_once('/') {
            Some((_, name)) => name.to_string(),
            None => self.path.clone(),
        };
    }

    /// Sets `ext` to the text after the last `.` of the name, or empty if there is none.
    pub fn parse_ext(&mut self) {
        self.ext = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_string())
            .unwrap_or_default();
    }

    /// Checks that the path is non-empty and names a file.
    pub fn validate(&self) -> FileResult<()> {
        if self.path.is_empty() {
            return Err(FileError::EmptyPath);
        }
        if self.name.is_empty() {
            return Err(FileError::missing_name(&self.path));
        }
        Ok(())
    }

    /// Returns true once a name has been parsed.
    pub fn is_parsed(&self) -> bool {
        !self.name.is_empty()
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path={} name={} ext={}", self.path, self.name, self.ext)
    }
}
