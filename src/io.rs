//! Whole-file text load/save and content classification
//!
//! Only text-like files (guessed from the path extension) are allowed into
//! the editor. Everything here is synchronous and runs on the UI thread;
//! files are assumed small and local.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors surfaced at the file-operation boundary.
///
/// Every failure is terminal for the single user action that triggered it;
/// nothing retries.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("this file type is not supported for editing ({mime})")]
    Unsupported { mime: String },

    #[error("could not access file: {0}")]
    Access(#[from] io::Error),
}

/// Guessed content classification of a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Other(String),
}

/// Classify a path by its guessed MIME type. Anything that is not `text/*`
/// (including unknown extensions) is `Other`.
pub fn classify(path: &Path) -> ContentKind {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() == mime_guess::mime::TEXT {
        ContentKind::Text
    } else {
        ContentKind::Other(mime.essence_str().to_string())
    }
}

/// Read a whole text file, rejecting non-text classifications up front.
///
/// Read failures (missing file, permissions, invalid UTF-8) surface as
/// [`FileError::Access`].
pub fn load_text(path: &Path) -> Result<String, FileError> {
    match classify(path) {
        ContentKind::Text => {
            let content = std::fs::read_to_string(path)?;
            log::info!("loaded {} ({} chars)", path.display(), content.chars().count());
            Ok(content)
        }
        ContentKind::Other(mime) => Err(FileError::Unsupported { mime }),
    }
}

/// Write the editor's text to `path` verbatim
pub fn save_text(path: &Path, text: &str) -> Result<(), FileError> {
    std::fs::write(path, text)?;
    log::info!("saved {} ({} bytes)", path.display(), text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Unique scratch path under the OS temp dir
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("punch_patch_io_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_classify_text_extensions() {
        assert_eq!(classify(Path::new("notes.txt")), ContentKind::Text);
        assert_eq!(classify(Path::new("data/config.csv")), ContentKind::Text);
    }

    #[test]
    fn test_classify_png_is_other() {
        assert_eq!(
            classify(Path::new("assets/logo.png")),
            ContentKind::Other("image/png".to_string())
        );
    }

    #[test]
    fn test_classify_unknown_extension_is_other() {
        assert_eq!(
            classify(Path::new("blob.xyzzy")),
            ContentKind::Other("application/octet-stream".to_string())
        );
    }

    #[test]
    fn test_load_text_reads_contents() {
        let path = temp_path("hello.txt");
        std::fs::write(&path, "hello").unwrap();
        let content = load_text(&path).unwrap();
        assert_eq!(content, "hello");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_non_text_is_unsupported_without_touching_disk() {
        // The path does not exist; classification alone must reject it
        let err = load_text(Path::new("/nonexistent/shot.png")).unwrap_err();
        match err {
            FileError::Unsupported { mime } => assert_eq!(mime, "image/png"),
            other => panic!("expected Unsupported, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_text_file_is_access_error() {
        let err = load_text(Path::new("/nonexistent/readme.txt")).unwrap_err();
        assert!(matches!(err, FileError::Access(_)));
    }

    #[test]
    fn test_load_invalid_utf8_is_access_error() {
        let path = temp_path("bad_utf8.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let err = load_text(&path).unwrap_err();
        assert!(matches!(err, FileError::Access(_)));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_text_writes_exact_contents() {
        let path = temp_path("save.txt");
        save_text(&path, "abc").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc");
        let _ = std::fs::remove_file(&path);
    }
}
