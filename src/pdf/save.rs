//! Writing finished documents to disk

use std::io::Write;
use std::path::Path;

use log::debug;
use lopdf::Document;
use tempfile::NamedTempFile;

use crate::error::Result;

/// Save a document without leaving a half-written file behind
///
/// The document is serialized in memory first, written to a uniquely named
/// temporary file in the target's directory and then renamed into place. If
/// any step fails the temporary file is removed on drop and `path` is left as
/// it was.
pub fn save_document(doc: &mut Document, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir)?;
    debug!(
        "Writing {} bytes to {} via {}",
        buffer.len(),
        path.display(),
        temp.path().display()
    );

    temp.write_all(&buffer)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn temp_files_in(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .expect("Failed to list directory")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(".tmp"))
            .collect()
    }

    #[test]
    fn test_save_writes_target() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let target = dir.path().join("out.pdf");

        let mut doc = Document::with_version("1.5");
        save_document(&mut doc, &target).expect("Failed to save");

        assert!(target.exists());
        assert!(temp_files_in(dir.path()).is_empty(), "Temporary file left behind");
    }

    #[test]
    fn test_save_replaces_existing_target() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let target = dir.path().join("out.pdf");
        fs::write(&target, b"old contents").expect("Failed to write file");

        let mut doc = Document::with_version("1.5");
        save_document(&mut doc, &target).expect("Failed to save");

        let saved = fs::read(&target).expect("Failed to read target");
        assert!(saved.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_save_ignores_neighbouring_partial_names() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let target = dir.path().join("out.pdf");

        // Existing entries named like scratch files must survive the save
        let blocking_dir = dir.path().join(".out.pdf.partial");
        fs::create_dir(&blocking_dir).expect("Failed to create directory");
        let user_file = dir.path().join("out.pdf.partial");
        fs::write(&user_file, b"keep me").expect("Failed to write file");

        let mut doc = Document::with_version("1.5");
        save_document(&mut doc, &target).expect("Failed to save");

        assert!(target.exists());
        assert!(blocking_dir.is_dir());
        assert_eq!(fs::read(&user_file).expect("Failed to read user file"), b"keep me");
    }

    #[test]
    fn test_failed_write_leaves_nothing() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let target = dir.path().join("missing-dir").join("out.pdf");

        let mut doc = Document::with_version("1.5");
        let result = save_document(&mut doc, &target);

        assert!(result.is_err());
        assert!(!target.exists());
        assert!(temp_files_in(dir.path()).is_empty());
    }
}
