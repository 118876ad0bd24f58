//! Corpus file discovery and ordering.
//!
//! A corpus directory holds one ghazal per `.txt` file, conventionally
//! named by number (`1.txt`, `2.txt`, ...). Discovery selects the text
//! files and orders them numerically by filename stem; files with
//! non-numeric stems sort after all numeric ones.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::error::GhazalError;
use crate::Result;

/// Discover the ghazal files in a corpus directory.
///
/// Returns the `.txt` files in `dir`, ordered by [`compare_stems`].
/// The directory must exist; a missing directory is an error before
/// any file is touched.
///
/// # Example
///
/// ```rust
/// use ghazallib::ghazal_files;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("10.txt"), "").unwrap();
/// fs::write(dir.path().join("2.txt"), "").unwrap();
///
/// let files = ghazal_files(dir.path()).unwrap();
/// let names: Vec<_> = files
///     .iter()
///     .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
///     .collect();
/// assert_eq!(names, ["2.txt", "10.txt"]);
/// ```
pub fn ghazal_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(GhazalError::DirectoryNotFound(dir.to_path_buf()));
    }

    let pattern = dir.join("*.txt");
    let entries = glob::glob(&pattern.to_string_lossy()).map_err(|e| GhazalError::InvalidGlob {
        pattern: pattern.to_string_lossy().into_owned(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| GhazalError::Io(e.into_error()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| compare_stems(a, b));

    Ok(files)
}

/// Ordering for ghazal filenames: numeric stems ascending, then
/// everything else alphabetically.
///
/// The numeric-last rule mirrors the corpus convention of
/// integer-named files; a stray `abstract.txt` sorts after `99.txt`
/// rather than before `2.txt`.
pub fn compare_stems(a: &Path, b: &Path) -> Ordering {
    stem_key(a).cmp(&stem_key(b))
}

/// Sort key for one path: numeric stems order by value, non-numeric
/// stems compare greater than every number and fall back to the stem
/// text.
fn stem_key(path: &Path) -> (bool, u64, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match stem.parse::<u64>() {
        Ok(n) => (false, n, stem),
        Err(_) => (true, 0, stem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn numeric_stems_sort_ascending_by_value() {
        let temp = tempdir().unwrap();
        for name in ["2.txt", "10.txt", "1.txt"] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let files = ghazal_files(temp.path()).unwrap();
        assert_eq!(names(&files), ["1.txt", "2.txt", "10.txt"]);
    }

    #[test]
    fn non_numeric_stems_sort_after_numeric_ones() {
        let temp = tempdir().unwrap();
        for name in ["2.txt", "10.txt", "1.txt", "abstract.txt"] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let files = ghazal_files(temp.path()).unwrap();
        assert_eq!(names(&files), ["1.txt", "2.txt", "10.txt", "abstract.txt"]);
    }

    #[test]
    fn non_numeric_stems_are_alphabetical_among_themselves() {
        let temp = tempdir().unwrap();
        for name in ["notes.txt", "abstract.txt", "3.txt"] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let files = ghazal_files(temp.path()).unwrap();
        assert_eq!(names(&files), ["3.txt", "abstract.txt", "notes.txt"]);
    }

    #[test]
    fn only_txt_files_are_selected() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("1.txt"), "").unwrap();
        fs::write(temp.path().join("readme.md"), "").unwrap();
        fs::write(temp.path().join("2.txt.bak"), "").unwrap();

        let files = ghazal_files(temp.path()).unwrap();
        assert_eq!(names(&files), ["1.txt"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("hafiz-9");

        let err = ghazal_files(&missing).unwrap_err();
        assert!(matches!(err, GhazalError::DirectoryNotFound(p) if p == missing));
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let temp = tempdir().unwrap();
        let files = ghazal_files(temp.path()).unwrap();
        assert!(files.is_empty());
    }
}
