//! Persisting rendered pages.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Write `text` to `path`, replacing whatever is there.
///
/// Generated pages are never merged with existing content; manual edits are
/// lost on the next run. Missing parent directories are created.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    fs::write(path, text).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_hand_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Player.md");
        let notes = "# Player\n\nHand-written notes that are much longer than the page.\n";
        fs::write(&path, notes).unwrap();

        write_document(&path, "# Player\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Player\n");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Core/Utils/Configuration.md");
        write_document(&path, "# Configuration\n").unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should go.
        let path = dir.path().join("Blocked.md");
        fs::create_dir(&path).unwrap();

        let err = write_document(&path, "# Blocked\n").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("Blocked.md"));
    }
}
