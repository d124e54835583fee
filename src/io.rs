//! File helpers used by the command line front end.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Fail with [`Error::MissingInput`] unless `path` is an existing regular file.
pub fn ensure_input_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingInput {
            path: path.to_path_buf(),
        })
    }
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Create `path` and hand a buffered writer for it to `write`.
///
/// The writer is flushed before returning; any I/O failure is reported
/// against `path`.
pub fn write_output<T, F>(path: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<T>,
{
    let write_err = |source| Error::Write {
        source,
        path: path.to_path_buf(),
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    let value = write(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("README.md");
        let err = ensure_input_file(&missing).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
        assert_eq!(err.to_string(), format!("Missing {}", missing.display()));
    }

    #[test]
    fn test_read_lines_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("README.md");
        assert!(matches!(read_lines(&missing), Err(Error::Read { .. })));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ensure_input_file(dir.path()),
            Err(Error::MissingInput { .. })
        ));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let count = write_output(&path, |writer| {
            writer.write_all(b"<p>\nx\n</p>\n")?;
            Ok(3)
        })
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>\nx\n</p>\n");
        assert_eq!(read_lines(&path).unwrap(), vec!["<p>", "x", "</p>"]);
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.html");
        assert!(matches!(
            write_output(&path, |_| Ok(())),
            Err(Error::Write { .. })
        ));
    }

    #[test]
    fn test_writer_error_is_reported_against_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let result: Result<()> = write_output(&path, |_| {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
        });
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(err.to_string().contains("out.html"));
    }
}
