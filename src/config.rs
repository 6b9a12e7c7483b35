//! Immutable settings shared by the renamer and the undoer.
//!
//! Nothing here is global: callers build a [`Settings`] and an
//! [`ExtensionSet`] and hand them to the operations, so tests can point both
//! at a temporary directory with a controlled extension selection.

use crate::error::{RenameError, Result};
use std::collections::BTreeSet;

/// Image extensions the tool knows about, lowercase with leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp"];

/// File name of the undo log kept inside each managed directory.
pub const DEFAULT_UNDO_LOG: &str = ".undo_log.json";

/// Settings injected into [`Renamer`](crate::ops::Renamer) and
/// [`Undoer`](crate::ops::Undoer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Undo log file name, relative to the managed directory.
    pub undo_log_name: String,
}

impl Settings {
    pub fn with_undo_log_name(name: impl Into<String>) -> Self {
        Self {
            undo_log_name: name.into(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_undo_log_name(DEFAULT_UNDO_LOG)
    }
}

/// Non-empty selection of image extensions, normalized to `.ext` lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    /// Builds a selection from user-supplied names.
    ///
    /// Accepts `jpg`, `.jpg` and `.JPG` alike. Every entry must belong to
    /// [`SUPPORTED_EXTENSIONS`] and at least one must be given.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extensions = BTreeSet::new();

        for name in names {
            let normalized = normalize_extension(name.as_ref());
            if !SUPPORTED_EXTENSIONS.contains(&normalized.as_str()) {
                return Err(RenameError::UnsupportedExtension(
                    name.as_ref().to_string(),
                    SUPPORTED_EXTENSIONS.join(", "),
                ));
            }
            extensions.insert(normalized);
        }

        if extensions.is_empty() {
            return Err(RenameError::NoExtensions);
        }

        Ok(Self { extensions })
    }

    /// Every supported extension.
    pub fn all() -> Self {
        Self {
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Case-insensitive membership test. Takes the extension with or without
    /// its leading dot.
    pub fn matches(&self, extension: &str) -> bool {
        self.extensions.contains(&normalize_extension(extension))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::all()
    }
}

fn normalize_extension(name: &str) -> String {
    let trimmed = name.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    format!(".{}", bare.to_lowercase())
}
