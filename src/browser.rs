//! Directory tree state and filesystem enumeration
//!
//! The browser pane renders directly off the filesystem: each expanded tree
//! node is enumerated with `read_dir` when drawn, so collapsed subtrees are
//! never listed. The only state kept here is the current root and the
//! path-entry buffer.

use std::path::{Path, PathBuf};

/// One row in the directory tree
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// State behind the file browser pane
pub struct DirBrowser {
    root: PathBuf,
    /// Contents of the "paste directory path" field
    pub path_input: String,
}

impl DirBrowser {
    pub fn new(root: PathBuf) -> Self {
        let path_input = root.display().to_string();
        Self { root, path_input }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Re-root the tree at `path` if it is an existing directory.
    ///
    /// Returns whether the root changed; on rejection the previous root and
    /// the caller's view of the tree stay untouched.
    pub fn set_root(&mut self, path: PathBuf) -> bool {
        if !path.is_dir() {
            log::warn!("rejected tree root {}: not a directory", path.display());
            return false;
        }
        log::info!("tree root changed to {}", path.display());
        self.path_input = path.display().to_string();
        self.root = path;
        true
    }

    /// Enumerate `path`, directories first, case-insensitively by name.
    ///
    /// Unreadable directories and entries yield an empty/partial listing;
    /// the browser has nothing useful to do with the error beyond logging.
    pub fn list(path: &Path) -> Vec<DirEntryInfo> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("could not read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        let mut rows: Vec<DirEntryInfo> = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                let is_dir = entry.file_type().ok()?.is_dir();
                Some(DirEntryInfo {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path,
                    is_dir,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a unique scratch directory under the OS temp dir
    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "punch_patch_browser_{}_{}",
            std::process::id(),
            name
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_set_root_rejects_nonexistent_path() {
        let start = temp_dir("start");
        let mut browser = DirBrowser::new(start.clone());
        assert!(!browser.set_root(PathBuf::from("/nonexistent")));
        assert_eq!(browser.root(), start.as_path());
        let _ = std::fs::remove_dir_all(&start);
    }

    #[test]
    fn test_set_root_rejects_file_path() {
        let dir = temp_dir("file_root");
        let file = dir.join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let mut browser = DirBrowser::new(dir.clone());
        assert!(!browser.set_root(file));
        assert_eq!(browser.root(), dir.as_path());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_set_root_accepts_directory_and_syncs_input() {
        let a = temp_dir("root_a");
        let b = temp_dir("root_b");

        let mut browser = DirBrowser::new(a.clone());
        assert!(browser.set_root(b.clone()));
        assert_eq!(browser.root(), b.as_path());
        assert_eq!(browser.path_input, b.display().to_string());

        let _ = std::fs::remove_dir_all(&a);
        let _ = std::fs::remove_dir_all(&b);
    }

    #[test]
    fn test_list_sorts_directories_first() {
        let dir = temp_dir("listing");
        std::fs::create_dir_all(dir.join("zsub")).unwrap();
        std::fs::write(dir.join("alpha.txt"), "").unwrap();
        std::fs::write(dir.join("Beta.txt"), "").unwrap();

        let rows = DirBrowser::list(&dir);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zsub", "alpha.txt", "Beta.txt"]);
        assert!(rows[0].is_dir);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_unreadable_path_is_empty() {
        assert!(DirBrowser::list(Path::new("/nonexistent")).is_empty());
    }
}
