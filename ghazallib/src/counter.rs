//! Couplet counting for ghazal files.
//!
//! A ghazal file holds one hemistich (half-line) per line, with blank
//! separator lines between couplets. Counting reads a file line by
//! line, ignores lines that are empty after trimming, and interprets
//! the remaining hemistichs as pairs: two hemistichs form one couplet.
//!
//! An odd hemistich count means the file is structurally broken and is
//! a hard error; the caller is expected to abort the whole run rather
//! than skip the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GhazalError;
use crate::Result;

/// A ghazal with more hemistichs than this is suspicious (the form
/// rarely exceeds 14 couplets) but still counted normally.
pub const SOFT_HEMISTICH_LIMIT: usize = 28;

/// Couplet count for a single ghazal file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupletCount {
    /// Number of non-empty lines (hemistichs), always even
    pub hemistichs: usize,
    /// Number of couplets (`hemistichs / 2`)
    pub couplets: usize,
}

impl CoupletCount {
    /// Whether the hemistich count exceeds [`SOFT_HEMISTICH_LIMIT`].
    ///
    /// This is advisory only; callers may surface a warning but the
    /// counts themselves are unaffected.
    pub fn exceeds_soft_limit(&self) -> bool {
        self.hemistichs > SOFT_HEMISTICH_LIMIT
    }
}

/// Count the couplets in a ghazal file.
///
/// Reads the file line by line and counts lines that are non-empty
/// after trimming surrounding whitespace. An odd hemistich count is a
/// structural error naming the file and the count.
///
/// An empty file (or one containing only whitespace lines) counts as
/// zero couplets, which is valid.
///
/// # Example
///
/// ```rust
/// use ghazallib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("1.txt");
/// fs::write(&path, "first hemistich\nsecond hemistich\n\nthird\nfourth\n").unwrap();
///
/// let count = count_file(&path).unwrap();
/// assert_eq!(count.couplets, 2);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<CoupletCount> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| GhazalError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let hemistichs = count_hemistichs(BufReader::new(file))?;

    if hemistichs % 2 != 0 {
        return Err(GhazalError::OddHemistichs {
            path: path.to_path_buf(),
            count: hemistichs,
        });
    }

    Ok(CoupletCount {
        hemistichs,
        couplets: hemistichs / 2,
    })
}

/// Count the non-empty lines in a reader.
///
/// Exposed so counting can be tested without touching the filesystem;
/// parity validation happens in [`count_file`], which knows the path.
pub fn count_hemistichs<R: BufRead>(reader: R) -> Result<usize> {
    let mut hemistichs = 0;
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            hemistichs += 1;
        }
    }
    Ok(hemistichs)
}
