//! Hemistich normalization.
//!
//! Scansion heuristics operate on a canonical letter sequence: bare
//! Perso-Arabic letters with hamzah-carrier forms folded to their base
//! letter, diacritics and punctuation stripped, and ZWNJ treated as a
//! word boundary. Anything outside that repertoire is a hard error;
//! the heuristics are only meaningful on fully Persian/Arabic text.

use crate::error::GhazalError;
use crate::Result;

/// The Persian consonant repertoire (including isolated hamzah).
pub(crate) const CONSONANTS: [char; 30] = [
    'ء', 'ب', 'پ', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ', 'س', 'ش', 'ص', 'ض', 'ط',
    'ظ', 'ع', 'غ', 'ف', 'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'ه',
];

pub(crate) fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

/// Fold one hemistich to its canonical letter sequence.
///
/// Keeps letters and spaces, folds hamzah carriers (أ ؤ ئ) to their
/// base letters and tāʼ marbūṭah to hāʼ, drops diacritics and
/// punctuation, and turns ZWNJ into a space. Errors on any other
/// character.
pub fn normalize_hemistich(hem: &str) -> Result<Vec<char>> {
    let mut letters = Vec::new();

    for c in hem.trim().chars() {
        match c {
            // Vowel letters
            'ا' | 'آ' | 'و' | 'ی' => letters.push(c),
            // Consonants (including isolated hamzah)
            'ء' | 'ب' | 'پ' | 'ت' | 'ث' | 'ج' | 'چ' | 'ح' | 'خ' | 'د' | 'ذ' | 'ر' | 'ز' | 'ژ'
            | 'س' | 'ش' | 'ص' | 'ض' | 'ط' | 'ظ' | 'ع' | 'غ' | 'ف' | 'ق' | 'ک' | 'گ' | 'ل' | 'م'
            | 'ن' | 'ه' => letters.push(c),
            // Hamzah carriers fold to the base letter
            'أ' => letters.push('ا'),
            'ؤ' => letters.push('و'),
            'ئ' => letters.push('ی'),
            // Tāʼ marbūṭah is written hāʼ in Persian
            'ة' => letters.push('ه'),
            // Diacritics: hamzah mark, fathah, shaddah, dammah, kasrah,
            // sukun, tanwin fathah, dagger alif, tanwin kasrah, tanwin
            // dammah
            '\u{654}' | '\u{64e}' | '\u{651}' | '\u{64f}' | '\u{650}' | '\u{652}' | '\u{64b}'
            | '\u{670}' | '\u{64d}' | '\u{64c}' => {}
            ' ' => letters.push(c),
            // ZWNJ separates words for our purposes
            '\u{200c}' => letters.push(' '),
            // Persian comma, question mark, exclamation mark
            '،' | '؟' | '!' => {}
            _ => return Err(GhazalError::UnexpectedCharacter(c)),
        }
    }

    Ok(letters)
}
