//! # ghazallib
//!
//! Corpus analysis for Persian ghazals: couplet counting with summary
//! statistics, and meter estimation from opening-syllable heuristics.
//!
//! ## Overview
//!
//! A ghazal file holds one hemistich (half-line) per line; two
//! hemistichs make a couplet, so a structurally sound file always has
//! an even number of non-empty lines. The library is split along that
//! grain:
//!
//! - **Corpus**: discover the `.txt` files of a corpus directory,
//!   ordered numerically by filename stem (non-numeric stems last)
//! - **Counting**: count the hemistichs of one file and validate the
//!   even-parity invariant; odd counts are hard errors
//! - **Statistics**: summarize couplet counts across a corpus (mean,
//!   median, min, max, sample standard deviation) plus a
//!   value-frequency distribution
//! - **Scansion**: estimate the meter of a single poem from its
//!   average hemistich length and opening-syllable markers
//!
//! All functions return plain data and do no printing; rendering is
//! the binaries' concern.
//!
//! ## Example
//!
//! ```rust
//! use ghazallib::{count_file, ghazal_files, Distribution, Summary};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // A corpus directory with two ghazals
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("1.txt"), "a\nb\nc\nd\n").unwrap();
//! fs::write(dir.path().join("2.txt"), "a\nb\n\nc\nd\ne\nf\n").unwrap();
//!
//! let mut couplets = Vec::new();
//! for file in ghazal_files(dir.path()).unwrap() {
//!     couplets.push(count_file(&file).unwrap().couplets as u64);
//! }
//! assert_eq!(couplets, [2, 3]);
//!
//! let summary = Summary::from_values(&couplets).unwrap();
//! assert_eq!(summary.min, 2);
//! assert_eq!(summary.max, 3);
//!
//! let distribution = Distribution::from_values(&couplets);
//! assert_eq!(distribution.frequency(2), 1);
//! ```

pub mod corpus;
pub mod counter;
pub mod error;
pub mod scansion;
pub mod stats;

pub use corpus::{compare_stems, ghazal_files};
pub use counter::{count_file, count_hemistichs, CoupletCount, SOFT_HEMISTICH_LIMIT};
pub use error::GhazalError;
pub use scansion::{
    scan_file, scan_text, LengthEstimate, MeterLength, MeterScan, SyllableEvidence,
    SyllableVerdict, MAX_ANALYZED_HEMISTICHS, MAX_POEM_BYTES, MIN_HEMISTICHS,
};
pub use stats::{Distribution, Measurement, Summary};

/// Result type for ghazallib operations
pub type Result<T> = std::result::Result<T, GhazalError>;
