//! Document ingestion boundary.
//!
//! Turns a file on disk into `(name, text)` for the session to chunk. Only
//! plain-text formats are accepted; Markdown is decoded as raw text without
//! any structural extraction.

use std::fs;
use std::path::Path;

use crate::error::ChatError;

/// Extensions the adapter accepts.
const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Raw document text paired with the file name it came from.
#[derive(Debug, Clone)]
pub struct IngestedDocument {
    pub name: String,
    pub text: String,
}

/// Lowercased extension of a file name, or empty when there is none.
pub(crate) fn extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Whether a file name carries an accepted extension.
pub fn is_supported(name: &str) -> bool {
    ACCEPTED_EXTENSIONS.contains(&extension(name).as_str())
}

/// Read a document from disk.
pub fn read_document(path: &Path) -> Result<IngestedDocument, ChatError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !is_supported(&name) {
        return Err(ChatError::UnsupportedFormat(extension(&name)));
    }

    let text = fs::read_to_string(path).map_err(|e| ChatError::ReadFailure(e.to_string()))?;
    Ok(IngestedDocument { name, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello from disk").unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.name, "notes.txt");
        assert_eq!(doc.text, "hello from disk");
    }

    #[test]
    fn markdown_is_read_as_raw_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.md");
        std::fs::write(&path, "# Title\nbody").unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.text, "# Title\nbody");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = read_document(Path::new("slides.pptx")).unwrap_err();
        assert!(matches!(err, ChatError::UnsupportedFormat(ext) if ext == "pptx"));
    }

    #[test]
    fn extension_matching_ignores_case() {
        assert!(is_supported("NOTES.TXT"));
        assert!(is_supported("Readme.Md"));
        assert!(!is_supported("archive.tar.gz"));
        assert!(!is_supported("no_extension"));
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("gone.txt")).unwrap_err();
        assert!(matches!(err, ChatError::ReadFailure(_)));
    }
}
