//! File persistence helpers. Filenames derive from a display name; existing
//! files are overwritten silently.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};

/// Derives a filesystem-safe filename stem from a display name: lowercase,
/// spaces replaced with underscores. Idempotent.
pub fn derive_filename(display_name: &str) -> String {
    display_name.trim().to_lowercase().replace(' ', "_")
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| Error::io(dir, err))
}

/// Explicit CLI argument first, configured directory otherwise.
pub fn resolve_output_dir(arg: Option<PathBuf>, cfg: &Config) -> PathBuf {
    arg.unwrap_or_else(|| cfg.output_dir.clone())
}

/// Writes `data` as UTF-8 under `out_dir` as `<derived_name>.<extension>` and
/// returns the absolute path written.
pub fn save_to_file(
    data: &str,
    display_name: &str,
    out_dir: &Path,
    extension: &str,
) -> Result<PathBuf> {
    ensure_directory(out_dir)?;
    let filename = format!("{}.{extension}", derive_filename(display_name));
    let path = out_dir.join(filename);
    fs::write(&path, data).map_err(|err| Error::io(&path, err))?;
    Ok(fs::canonicalize(&path).unwrap_or(path))
}

/// Joins `lines` with `separator` and delegates to [`save_to_file`].
pub fn save_lines_to_file(
    lines: &[String],
    display_name: &str,
    out_dir: &Path,
    extension: &str,
    separator: &str,
) -> Result<PathBuf> {
    save_to_file(&lines.join(separator), display_name, out_dir, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_filename_lowercases_and_underscores() {
        assert_eq!(derive_filename("Jane Doe"), "jane_doe");
    }

    #[test]
    fn derive_filename_is_idempotent() {
        let once = derive_filename("Jane Doe");
        assert_eq!(derive_filename(&once), once);
    }

    #[test]
    fn derive_filename_trims_surrounding_whitespace() {
        assert_eq!(derive_filename("  Jane Doe "), "jane_doe");
    }

    #[test]
    fn save_to_file_writes_exact_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_to_file("hello", "Jane Doe", dir.path(), "txt").unwrap();
        assert!(path.ends_with("jane_doe.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn save_to_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = save_to_file("x", "Jane Doe", &nested, "json").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_to_file_overwrites_silently() {
        let dir = tempfile::tempdir().unwrap();
        save_to_file("first", "Jane Doe", dir.path(), "txt").unwrap();
        let path = save_to_file("second", "Jane Doe", dir.path(), "txt").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn save_lines_joins_with_the_separator() {
        let dir = tempfile::tempdir().unwrap();
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let path = save_lines_to_file(&lines, "Jane Doe", dir.path(), "txt", "\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "a\nb\nc");
    }

    #[test]
    fn saved_path_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_to_file("x", "Jane Doe", dir.path(), "txt").unwrap();
        assert!(path.is_absolute());
    }
}
