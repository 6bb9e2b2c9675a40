//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file as UTF-8.
///
/// Invalid UTF-8 maps to `file.invalid_encoding`; every other failure to
/// `file.read_failed`.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => Error::file_invalid_encoding(path, e.to_string()),
        _ => Error::file_read_failed(path, e.to_string()),
    })
}

/// Overwrite a file with `content`.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_write_failed(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_text_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "<input className=\"border\" />").unwrap();

        let content = read_text(temp.path()).unwrap();
        assert!(content.contains("className"));
    }

    #[test]
    fn read_text_returns_error_for_missing_file() {
        let result = read_text(Path::new("/nonexistent/Form.tsx"));
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "file.read_failed");
        assert_eq!(err.details["path"], "/nonexistent/Form.tsx");
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = read_text(temp.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "file.invalid_encoding");
    }

    #[test]
    fn write_text_overwrites_content() {
        let temp = NamedTempFile::new().unwrap();
        fs::write(temp.path(), "old content that is longer").unwrap();

        write_text(temp.path(), "new").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "new");
    }

    #[test]
    fn write_text_returns_error_for_invalid_path() {
        let err = write_text(Path::new("/nonexistent/dir/Form.tsx"), "content").unwrap_err();
        assert_eq!(err.code.as_str(), "file.write_failed");
    }
}
