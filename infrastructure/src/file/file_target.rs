//! Log file targets.
//!
//! Validates a log file path and opens it for append or truncate. The
//! resulting [`TraceTarget`] is owned by the tracer, which may delete the
//! file on close.

use log_tracer_application::{LogTracer, TraceTarget, TracerOptions};
use log_tracer_domain::{ConfigurationError, TracerError};
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, is_separator};
use tracing::debug;

/// Tracer writing to a buffered log file
pub type FileTracer = LogTracer<BufWriter<File>>;

/// Check that `path` names a file inside an existing directory.
///
/// A relative path without a directory component refers to the current
/// directory. A path ending with a separator has no file name.
pub fn validate_log_path(path: &Path) -> Result<(), ConfigurationError> {
    let trailing_separator = path
        .as_os_str()
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(is_separator);

    let (directory, file_name) = if trailing_separator {
        (Some(path), None)
    } else {
        (path.parent(), path.file_name())
    };

    if let Some(directory) = directory.filter(|dir| !dir.as_os_str().is_empty())
        && !directory.is_dir()
    {
        return Err(ConfigurationError::DirectoryNotFound(directory.to_path_buf()));
    }

    if file_name.is_none_or(|name| name.is_empty()) {
        return Err(ConfigurationError::EmptyFileName(path.to_path_buf()));
    }

    Ok(())
}

/// Open `path` for a tracer, appending to or truncating an existing file.
pub fn open_file_target(
    path: impl AsRef<Path>,
    append: bool,
) -> Result<TraceTarget<BufWriter<File>>, TracerError> {
    let path = path.as_ref();
    validate_log_path(path)?;

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    let fresh = file.metadata()?.len() == 0;

    debug!(path = %path.display(), append, fresh, "Opened log file");
    Ok(TraceTarget::owned(BufWriter::new(file), path).with_fresh(fresh))
}

/// Validate the options, open `path` and build a tracer that owns the file.
///
/// The level filter is checked before the file is touched, so a rejected
/// configuration never creates or truncates anything.
pub fn open_log_tracer(
    path: impl AsRef<Path>,
    append: bool,
    options: TracerOptions,
) -> Result<FileTracer, TracerError> {
    options.level_filter.validate_filter()?;
    let target = open_file_target(path, append)?;
    LogTracer::new(target, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_tracer_domain::{LevelSet, TextEncoding};

    #[test]
    fn test_validate_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        assert!(matches!(
            validate_log_path(&path),
            Err(ConfigurationError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_validate_empty_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let with_separator = format!("{}{}", dir.path().display(), std::path::MAIN_SEPARATOR);
        assert!(matches!(
            validate_log_path(Path::new(&with_separator)),
            Err(ConfigurationError::EmptyFileName(_))
        ));
        assert!(matches!(
            validate_log_path(Path::new("")),
            Err(ConfigurationError::EmptyFileName(_))
        ));
    }

    #[test]
    fn test_validate_bare_file_name() {
        assert!(validate_log_path(Path::new("app.log")).is_ok());
    }

    #[test]
    fn test_truncate_then_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let options = || TracerOptions::new().with_level_filter(LevelSet::ALL);

        let mut tracer = open_log_tracer(&path, false, options()).unwrap();
        tracer.info("first").unwrap();
        tracer.close().unwrap();

        let mut tracer = open_log_tracer(&path, true, options()).unwrap();
        tracer.info("second").unwrap();
        tracer.close().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));

        let mut tracer = open_log_tracer(&path, false, options()).unwrap();
        tracer.info("third").unwrap();
        tracer.close().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_rejected_filter_does_not_touch_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.log");
        let result = open_log_tracer(
            &path,
            false,
            TracerOptions::new().with_level_filter(LevelSet::NONE | LevelSet::INFO),
        );
        assert!(matches!(
            result,
            Err(TracerError::Configuration(ConfigurationError::NoneCombined(_)))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_preamble_only_for_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utf16.log");
        let options = || {
            TracerOptions::new()
                .with_level_filter(LevelSet::ALL)
                .with_include_level(false)
                .with_encoding(TextEncoding::Utf16Le)
        };

        let mut tracer = open_log_tracer(&path, true, options()).unwrap();
        tracer.info("a").unwrap();
        tracer.close().unwrap();

        let mut tracer = open_log_tracer(&path, true, options()).unwrap();
        tracer.info("b").unwrap();
        tracer.close().unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let boms = bytes.windows(2).filter(|w| *w == [0xFF, 0xFE]).count();
        assert_eq!(boms, 1);
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
    }

    #[test]
    fn test_delete_on_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temp.log");
        let mut tracer = open_log_tracer(
            &path,
            false,
            TracerOptions::new().with_level_filter(LevelSet::DEBUG),
        )
        .unwrap();
        assert!(tracer.owns_path());
        tracer.debug("scratch").unwrap();
        tracer.close_and_delete(true).unwrap();
        assert!(!path.exists());
    }
}
