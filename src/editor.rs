//! Text editor pane state
//!
//! The editor holds the loaded file as a plain in-memory string. Whole-file
//! semantics only: open replaces the buffer, save writes it back verbatim.
//! No validation, versioning, or diffing.

use std::path::{Path, PathBuf};

/// State behind the central text editing pane
#[derive(Default)]
pub struct EditorPane {
    text: String,
    path: Option<PathBuf>,
    modified: bool,
}

impl EditorPane {
    /// Replace the buffer with freshly loaded file content
    pub fn open(&mut self, path: PathBuf, content: String) {
        self.text = content;
        self.path = Some(path);
        self.modified = false;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the `TextEdit` widget; callers must flag edits
    /// through [`EditorPane::mark_modified`]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Record a successful save to `path`
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.modified = false;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for the pane heading, if a file is loaded
    pub fn display_name(&self) -> Option<String> {
        self.path.as_ref().map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.to_string_lossy().into_owned())
        })
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
