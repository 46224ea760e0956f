//! File-backed note log.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use super::error::NoteStoreError;
use crate::core::config::NotesConfig;

/// Sentinel returned to clients when the log holds no entries.
pub const NO_NOTES_MESSAGE: &str = "No notes yet";

/// Append-only note log stored as one entry per line.
///
/// There is no locking: concurrent appends rely on the OS append-mode
/// write, and a read racing a write may observe a partial entry.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Create a store for the configured note file.
    pub fn new(config: &NotesConfig) -> Self {
        Self::at(&config.path)
    }

    /// Create a store backed by an explicit file path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the note file (and its parent directory) if it is missing.
    pub fn ensure_file(&self) -> Result<(), NoteStoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| NoteStoreError::io(parent, e))?;
        }

        debug!("Creating empty note file at {}", self.path.display());
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map(drop)
            .map_err(|e| NoteStoreError::io(&self.path, e))
    }

    /// Append one entry followed by a newline.
    ///
    /// Line breaks inside the message (`\n`, `\r\n` or a lone `\r`) are
    /// collapsed to spaces so that every append produces exactly one line.
    /// Blank messages are rejected and leave the file untouched.
    #[instrument(skip_all, fields(path = %self.path.display(), len = message.len()))]
    pub fn append(&self, message: &str) -> Result<(), NoteStoreError> {
        let mut record = single_line(message);
        if record.trim().is_empty() {
            return Err(NoteStoreError::EmptyMessage);
        }
        record.push('\n');

        self.ensure_file()?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| NoteStoreError::io(&self.path, e))?;

        // One write call per record keeps appends from splitting a line.
        file.write_all(record.as_bytes())
            .map_err(|e| NoteStoreError::io(&self.path, e))?;

        debug!("Appended note ({} bytes)", record.len());
        Ok(())
    }

    /// Whole log with surrounding whitespace trimmed.
    ///
    /// An empty string means the log holds no entries.
    pub fn read_all(&self) -> Result<String, NoteStoreError> {
        self.ensure_file()?;

        let content =
            fs::read_to_string(&self.path).map_err(|e| NoteStoreError::io(&self.path, e))?;

        Ok(content.trim().to_string())
    }

    /// Most recently appended non-blank entry, if any.
    pub fn read_latest(&self) -> Result<Option<String>, NoteStoreError> {
        let content = self.read_all()?;

        Ok(content
            .lines()
            .map(str::trim)
            .rev()
            .find(|line| !line.is_empty())
            .map(str::to_string))
    }
}

/// Collapse a message onto a single line.
fn single_line(message: &str) -> String {
    message
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
