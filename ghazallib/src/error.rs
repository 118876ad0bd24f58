//! Error types for ghazallib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analyzing a ghazal corpus
#[derive(Error, Debug)]
pub enum GhazalError {
    /// A corpus directory does not exist
    #[error("directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A ghazal has an odd number of hemistichs, so it cannot be split
    /// into couplets
    #[error("file '{path}' has an odd number of hemistichs: {count}")]
    OddHemistichs { path: PathBuf, count: usize },

    /// Not enough measurements to compute the requested statistic
    #[error("need at least {needed} measurements for {statistic}, got {got}")]
    TooFewMeasurements {
        statistic: &'static str,
        needed: usize,
        got: usize,
    },

    /// Input file exceeds the size cap for scansion
    #[error("file '{path}' is too large ({size} bytes); the maximum is {max} bytes")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    /// Poem has too few hemistichs for meter estimation
    #[error("poem is too short: found {found} hemistichs, at least {min} are required")]
    PoemTooShort { found: usize, min: usize },

    /// A character outside the Persian/Arabic repertoire
    #[error("unexpected character: {}; text must be fully in Persian/Arabic script", .0.escape_unicode())]
    UnexpectedCharacter(char),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
