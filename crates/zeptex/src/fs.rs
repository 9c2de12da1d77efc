#![forbid(unsafe_code)]

//! Disk storage.
//!
//! The persisted format is plain text, one buffer line per file line,
//! newline-terminated. Load strips line terminators (`\n` and `\r\n`);
//! nothing else is normalized.

use std::io;
use std::path::Path;

use zeptex_core::storage::Storage;

/// [`Storage`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStorage;

impl Storage for DiskStorage {
    fn load(&self, path: &Path) -> io::Result<Vec<String>> {
        let content = std::fs::read_to_string(path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn save(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
        std::fs::write(path, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let lines = vec!["first".to_string(), String::new(), "third".to_string()];

        DiskStorage.save(&path, &lines).unwrap();
        assert_eq!(DiskStorage.load(&path).unwrap(), lines);

        // Newline-terminated, including the last line.
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "first\n\nthird\n");
    }

    #[test]
    fn save_empty_buffer_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        DiskStorage.save(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn load_strips_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, "one\r\ntwo\r\n").unwrap();
        assert_eq!(DiskStorage.load(&path).unwrap(), ["one", "two"]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DiskStorage.load(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
