//! Meter estimation for a single ghazal.
//!
//! Classical Persian meters split into long and short families by how
//! many letters a hemistich carries, and within a family the lengths
//! of the first two syllables narrow the candidates further. This
//! module estimates all three signals from the poem text alone:
//!
//! 1. normalize each hemistich to a canonical letter sequence
//!    ([`normalize`]),
//! 2. collect long/short markers for the first and second syllables
//!    from known opening patterns,
//! 3. classify overall meter length from the average letter count.
//!
//! The result is a [`MeterScan`] of plain data; turning the evidence
//! into a readable assessment is left to the caller.

pub mod normalize;
mod syllables;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GhazalError;
use crate::Result;

use syllables::OpeningPattern;

/// Poems shorter than this cannot be scanned usefully.
pub const MIN_HEMISTICHS: usize = 10;

/// Evidence gathering stops after this many hemistichs.
pub const MAX_ANALYZED_HEMISTICHS: usize = 40;

/// Size cap for input files; a ghazal is never this long.
pub const MAX_POEM_BYTES: u64 = 10_000;

/// Meter length family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeterLength {
    /// Muṡamman-range meters
    Long,
    /// Musaddas-range meters (or mutaqārib muṡamman)
    Short,
}

/// Meter length classification with the measurement behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthEstimate {
    /// Average letters per hemistich, spaces excluded
    pub avg_letters: f64,
    pub length: MeterLength,
    /// Set when the average falls near the long/short boundary
    pub borderline: bool,
}

impl LengthEstimate {
    /// Classify an average letter count.
    ///
    /// At least 23.5 letters is clearly long and below 21.0 clearly
    /// short; the band between is classified with the borderline flag
    /// set (long from 22.5 up, short below that).
    fn classify(avg_letters: f64) -> Self {
        let (length, borderline) = if avg_letters >= 23.5 {
            (MeterLength::Long, false)
        } else if avg_letters >= 22.5 {
            (MeterLength::Long, true)
        } else if avg_letters >= 21.0 {
            (MeterLength::Short, true)
        } else {
            (MeterLength::Short, false)
        };

        Self {
            avg_letters,
            length,
            borderline,
        }
    }
}

/// What the gathered markers say about one syllable position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyllableVerdict {
    /// More than one long marker, no short ones
    Long,
    /// More than one short marker, no long ones
    Short,
    /// Markers of both kinds
    Mixed,
    /// At most one marker in total
    Unclear,
}

/// Long/short markers gathered for one syllable position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableEvidence {
    /// Hemistich numbers (1-based) with a long marker
    pub long_at: Vec<usize>,
    /// Hemistich numbers (1-based) with a short marker
    pub short_at: Vec<usize>,
}

impl SyllableEvidence {
    fn note_long(&mut self, hemistich_no: usize) {
        self.long_at.push(hemistich_no);
    }

    fn note_short(&mut self, hemistich_no: usize) {
        self.short_at.push(hemistich_no);
    }

    /// Weigh the markers.
    ///
    /// Both kinds present is contradictory evidence; a single marker
    /// of either kind is too little to call.
    pub fn verdict(&self) -> SyllableVerdict {
        if !self.long_at.is_empty() && !self.short_at.is_empty() {
            SyllableVerdict::Mixed
        } else if self.long_at.len() > 1 {
            SyllableVerdict::Long
        } else if self.short_at.len() > 1 {
            SyllableVerdict::Short
        } else {
            SyllableVerdict::Unclear
        }
    }
}

/// The full scan result for one poem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterScan {
    /// Normalized hemistichs that were analyzed, in order
    pub hemistichs: Vec<String>,
    pub length: LengthEstimate,
    /// First-syllable evidence
    pub first: SyllableEvidence,
    /// Second-syllable evidence
    pub second: SyllableEvidence,
}

/// Scan a ghazal file.
///
/// Refuses files over [`MAX_POEM_BYTES`], then defers to
/// [`scan_text`].
pub fn scan_file(path: impl AsRef<Path>) -> Result<MeterScan> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|source| GhazalError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > MAX_POEM_BYTES {
        return Err(GhazalError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_POEM_BYTES,
        });
    }

    let text = fs::read_to_string(path).map_err(|source| GhazalError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    scan_text(&text)
}

/// Scan poem text.
///
/// Blank lines are separators and are dropped; every remaining line is
/// one hemistich. Fewer than [`MIN_HEMISTICHS`] hemistichs is an
/// error. Only the first [`MAX_ANALYZED_HEMISTICHS`] hemistichs
/// contribute evidence; the average letter count is taken over the
/// same prefix.
pub fn scan_text(text: &str) -> Result<MeterScan> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    if lines.len() < MIN_HEMISTICHS {
        return Err(GhazalError::PoemTooShort {
            found: lines.len(),
            min: MIN_HEMISTICHS,
        });
    }

    let analyzed = lines.len().min(MAX_ANALYZED_HEMISTICHS);

    let mut hemistichs = Vec::with_capacity(analyzed);
    let mut total_letters = 0usize;
    let mut first = SyllableEvidence::default();
    let mut second = SyllableEvidence::default();

    for (i, line) in lines.iter().take(MAX_ANALYZED_HEMISTICHS).enumerate() {
        let hemistich_no = i + 1;

        let letters = normalize::normalize_hemistich(line)?;
        let nospace: Vec<char> = letters.iter().copied().filter(|c| *c != ' ').collect();

        total_letters += nospace.len();
        hemistichs.push(letters.iter().collect());

        gather_evidence(&letters, &nospace, hemistich_no, &mut first, &mut second);
    }

    let avg_letters = total_letters as f64 / analyzed as f64;

    Ok(MeterScan {
        hemistichs,
        length: LengthEstimate::classify(avg_letters),
        first,
        second,
    })
}

/// Apply every syllable heuristic to one hemistich.
fn gather_evidence(
    letters: &[char],
    nospace: &[char],
    hemistich_no: usize,
    first: &mut SyllableEvidence,
    second: &mut SyllableEvidence,
) {
    if syllables::long_first_syllable(letters) {
        first.note_long(hemistich_no);
    }
    if syllables::short_first_syllable(letters) {
        first.note_short(hemistich_no);
    }
    if syllables::long_second_syllable(letters) {
        second.note_long(hemistich_no);
    }
    if syllables::short_second_syllable(letters, nospace) {
        second.note_short(hemistich_no);
    }

    match syllables::opening_clue(letters) {
        Some(OpeningPattern::ShortLong) => {
            first.note_short(hemistich_no);
            second.note_long(hemistich_no);
        }
        Some(OpeningPattern::LongShort) => {
            first.note_long(hemistich_no);
            second.note_short(hemistich_no);
        }
        Some(OpeningPattern::LongLong) => {
            first.note_long(hemistich_no);
            second.note_long(hemistich_no);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Ten short hemistichs, all opening with alif maddah.
    fn short_meter_poem() -> String {
        let mut lines = Vec::new();
        for _ in 0..5 {
            lines.push("آتش عشق در دل ماست");
            lines.push("آب دریا به گل ماست");
        }
        lines.join("\n")
    }

    #[test]
    fn scan_counts_and_classifies() {
        let scan = scan_text(&short_meter_poem()).unwrap();

        assert_eq!(scan.hemistichs.len(), 10);
        // 14-letter hemistichs are well under the short threshold
        assert!(scan.length.avg_letters < 21.0);
        assert_eq!(scan.length.length, MeterLength::Short);
        assert!(!scan.length.borderline);
        // every hemistich opens with alif maddah
        assert_eq!(scan.first.long_at.len(), 10);
        assert_eq!(scan.first.verdict(), SyllableVerdict::Long);
    }

    #[test]
    fn blank_lines_are_separators() {
        let spaced = short_meter_poem().replace('\n', "\n\n");
        let scan = scan_text(&spaced).unwrap();
        assert_eq!(scan.hemistichs.len(), 10);
    }

    #[test]
    fn too_short_poem_is_rejected() {
        let err = scan_text("آب\nآتش\n").unwrap_err();
        assert!(matches!(
            err,
            GhazalError::PoemTooShort { found: 2, min: 10 }
        ));
    }

    #[test]
    fn foreign_characters_fail_the_scan() {
        let mut poem = short_meter_poem();
        poem.push_str("\nhello world");
        // 11 lines, one of them Latin
        assert!(matches!(
            scan_text(&poem).unwrap_err(),
            GhazalError::UnexpectedCharacter('h')
        ));
    }

    #[test]
    fn evidence_is_capped_at_forty_hemistichs() {
        let line = "آتش عشق در دل ماست";
        let poem = vec![line; 50].join("\n");

        let scan = scan_text(&poem).unwrap();
        assert_eq!(scan.hemistichs.len(), 40);
        assert_eq!(scan.first.long_at.len(), 40);
    }

    #[test]
    fn length_bands() {
        assert_eq!(LengthEstimate::classify(24.0).length, MeterLength::Long);
        assert!(!LengthEstimate::classify(24.0).borderline);

        let upper_band = LengthEstimate::classify(23.0);
        assert_eq!(upper_band.length, MeterLength::Long);
        assert!(upper_band.borderline);

        let lower_band = LengthEstimate::classify(21.5);
        assert_eq!(lower_band.length, MeterLength::Short);
        assert!(lower_band.borderline);

        assert_eq!(LengthEstimate::classify(18.0).length, MeterLength::Short);
        assert!(!LengthEstimate::classify(18.0).borderline);
    }

    #[test]
    fn verdict_rules() {
        let mut ev = SyllableEvidence::default();
        assert_eq!(ev.verdict(), SyllableVerdict::Unclear);

        ev.note_long(1);
        assert_eq!(ev.verdict(), SyllableVerdict::Unclear);

        ev.note_long(3);
        assert_eq!(ev.verdict(), SyllableVerdict::Long);

        ev.note_short(5);
        assert_eq!(ev.verdict(), SyllableVerdict::Mixed);

        let mut shorts = SyllableEvidence::default();
        shorts.note_short(1);
        shorts.note_short(2);
        assert_eq!(shorts.verdict(), SyllableVerdict::Short);
    }

    #[test]
    fn scan_file_reads_and_scans() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("1.txt");
        fs::write(&path, short_meter_poem()).unwrap();

        let scan = scan_file(&path).unwrap();
        assert_eq!(scan.hemistichs.len(), 10);
    }

    #[test]
    fn oversized_file_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("big.txt");
        fs::write(&path, "آ\n".repeat(6_000)).unwrap();

        assert!(matches!(
            scan_file(&path).unwrap_err(),
            GhazalError::FileTooLarge { .. }
        ));
    }
}
