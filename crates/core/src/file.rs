//! Whole-file replacement used by the catalog and config stores

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory holding `path`, `.` for a bare file name
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Replaces `path` with `contents`, ending the file with a newline
///
/// Contents go to a temporary file beside `path` which is then renamed over
/// it, so a reader sees either the old file or the new one. Missing parent
/// directories are created.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = parent_dir(path);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
        log::debug!("Created directory {}", dir.display());
    }

    let mut temp_file = NamedTempFile::new_in(&dir)?;
    temp_file.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        temp_file.write_all(b"\n")?;
    }
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parent_dir_of_bare_name() {
        assert_eq!(parent_dir(Path::new("books.json")), PathBuf::from("."));
        assert_eq!(
            parent_dir(Path::new("data/books.json")),
            PathBuf::from("data")
        );
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_atomic(&path, "first version, rather long").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_keeps_existing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.toml");

        write_atomic(&path, "a = 1\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a = 1\n");
    }

    #[test]
    fn test_write_atomic_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("out.txt");

        write_atomic(&path, "[]").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_atomic_onto_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("taken");
        fs::create_dir(&path).unwrap();

        assert!(write_atomic(&path, "[]").is_err());
    }
}
