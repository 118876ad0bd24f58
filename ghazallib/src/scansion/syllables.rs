//! Opening-syllable heuristics.
//!
//! Persian meters differ most audibly in the lengths of the first two
//! syllables, and a number of common opening words pin those lengths
//! down regardless of the rest of the hemistich. Each function here
//! inspects the start of a normalized hemistich (see
//! [`super::normalize`]) and reports whether it carries a marker for
//! one syllable length. Markers are heuristic: absence of a marker
//! means nothing, and a single firing is weak evidence.
//!
//! All matching is prefix-based and length-checked; a hemistich too
//! short for a pattern simply does not match it.

use super::normalize::is_consonant;

/// What a recognized opening word implies about the first two
/// syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpeningPattern {
    /// Short first syllable, long second (e.g. kasī, yakī)
    ShortLong,
    /// Long first syllable, short second (e.g. chīst, dūst, nīst)
    LongShort,
    /// Long first and second syllables (chandān)
    LongLong,
}

/// Marker for a long first syllable.
pub(crate) fn long_first_syllable(hem: &[char]) -> bool {
    // Initial alif maddah, or alif as the second letter
    if matches!(hem.first(), Some('آ')) || matches!(hem.get(1), Some('ا')) {
        return true;
    }

    // Initial "īn" or "khwā-"
    // One word would break the latter: "khavāniq." It is vanishingly
    // rare and never hemistich-initial in practice.
    if matches!(hem.get(..3), Some(['ا', 'ی', 'ن'] | ['خ', 'و', 'ا'])) {
        return true;
    }

    // Initial "az," "har," "gar," "ay," or "ham," then a space and a
    // consonant. "Bar" is left out: it can be "bar-i" with iżāfa.
    if matches!(
        hem.get(..4),
        Some(
            ['ا', 'ز', ' ', c]
                | ['ه', 'ر', ' ', c]
                | ['گ', 'ر', ' ', c]
                | ['ا', 'ی', ' ', c]
                | ['ه', 'م', ' ', c]
        ) if is_consonant(*c)
    ) {
        return true;
    }

    // Initial "amrūz" (also flags a long second syllable)
    matches!(hem.get(..5), Some(['ا', 'م', 'ر', 'و', 'ز']))
}

/// Marker for a short first syllable.
pub(crate) fn short_first_syllable(hem: &[char]) -> bool {
    // Initial "zih" followed by a consonant after the space
    if matches!(hem.get(..3), Some(['ز', ' ', c]) if is_consonant(*c)) {
        return true;
    }

    // Initial "bi," "ki," "chu," "chi," or "na" followed by a space;
    // initial "kujā," "hamī," "khudā," "agar," "chirā," or "digar"
    if matches!(
        hem.get(..3),
        Some(
            ['ب', 'ه', ' ']
                | ['ک', 'ه', ' ']
                | ['چ', 'و', ' ']
                | ['چ', 'ه', ' ']
                | ['ن', 'ه', ' ']
                | ['ک', 'ج', 'ا']
                | ['ه', 'م', 'ی']
                | ['خ', 'د', 'ا']
                | ['ا', 'گ', 'ر']
                | ['چ', 'ر', 'ا']
                | ['د', 'گ', 'ر']
        )
    ) {
        return true;
    }

    // Initial "shavad," "magar," "marā," "turā," or "hama" followed by
    // a space; initial "chunīn," "chunān," or "bi-bīn-"
    matches!(
        hem.get(..4),
        Some(
            ['ش', 'و', 'د', ' ']
                | ['م', 'گ', 'ر', ' ']
                | ['م', 'ر', 'ا', ' ']
                | ['ت', 'ر', 'ا', ' ']
                | ['ه', 'م', 'ه', ' ']
                | ['چ', 'ن', 'ی', 'ن']
                | ['چ', 'ن', 'ا', 'ن']
                | ['ب', 'ب', 'ی', 'ن']
        )
    )
}

/// Marker for a long second syllable.
pub(crate) fn long_second_syllable(hem: &[char]) -> bool {
    // Alif as the third letter, not word-initial, not after vāv or
    // another alif. "Nā-umīd" shows the limits of alif as a long-vowel
    // marker; the exclusions keep the common cases.
    if matches!(hem.get(..3), Some([_, prev, 'ا']) if !matches!(*prev, ' ' | 'و' | 'ا')) {
        return true;
    }

    // Initial "agar" followed by a consonant (already a short-first marker)
    if matches!(hem.get(..5), Some(['ا', 'گ', 'ر', ' ', c]) if is_consonant(*c)) {
        return true;
    }

    // Initial "bāshad" followed by a consonant (already a long-first
    // marker). "Sāqī" is left out: iżāfa can spoil it.
    if matches!(hem.get(..6), Some(['ب', 'ا', 'ش', 'د', ' ', c]) if is_consonant(*c)) {
        return true;
    }

    // Initial "amrūz" (also flags a long first syllable)
    if matches!(hem.get(..5), Some(['ا', 'م', 'ر', 'و', 'ز'])) {
        return true;
    }

    // Opening word like "tā," "bā," "yā": whatever follows the space
    // starts the second syllable
    if matches!(hem.get(1..3), Some(['ا', ' '])) && long_first_syllable(rest(hem, 3)) {
        return true;
    }

    // Opening "ay," "gar," or "az" plus a consonant, with a clearly
    // long syllable after it
    if matches!(
        hem.get(..4),
        Some(['ا', 'ی', ' ', c] | ['گ', 'ر', ' ', c] | ['ا', 'ز', ' ', c]) if is_consonant(*c)
    ) && long_first_syllable(rest(hem, 3))
    {
        return true;
    }

    // Opening "bi" or "ki" (short), with a clearly long syllable after
    if matches!(hem.get(..3), Some(['ب', 'ه', ' '] | ['ک', 'ه', ' ']))
        && long_first_syllable(rest(hem, 3))
    {
        return true;
    }

    // Initial "chunīn" or "chunān" (already a short-first marker)
    matches!(hem.get(..4), Some(['چ', 'ن', 'ی', 'ن'] | ['چ', 'ن', 'ا', 'ن']))
}

/// Marker for a short second syllable.
pub(crate) fn short_second_syllable(hem: &[char], hem_nospace: &[char]) -> bool {
    // Opening "bi" or "ki" with a clearly short syllable after it
    if matches!(hem.get(..3), Some(['ب', 'ه', ' '] | ['ک', 'ه', ' ']))
        && short_first_syllable(rest(hem, 3))
    {
        return true;
    }

    // Opening word like "tā," "bā," "yā" with a clearly short syllable
    // after it
    if matches!(hem.get(1..3), Some(['ا', ' '])) && short_first_syllable(rest(hem, 3)) {
        return true;
    }

    // Initial "har-ki," "ān-ki," "gar-chi," "ān-chi" (written solid),
    // or "pādishā-"
    if matches!(
        hem.get(..5),
        Some(
            ['ه', 'ر', 'ک', 'ه', ' ']
                | ['آ', 'ن', 'ک', 'ه', ' ']
                | ['گ', 'ر', 'چ', 'ه', ' ']
                | ['آ', 'ن', 'چ', 'ه', ' ']
                | ['پ', 'ا', 'د', 'ش', 'ا']
        )
    ) {
        return true;
    }

    // The same openings written with an internal space
    if matches!(
        hem.get(..6),
        Some(
            ['ه', 'ر', ' ', 'ک', 'ه', ' ']
                | ['آ', 'ن', ' ', 'ک', 'ه', ' ']
                | ['گ', 'ر', ' ', 'چ', 'ه', ' ']
                | ['آ', 'ن', ' ', 'چ', 'ه', ' ']
        )
    ) {
        return true;
    }

    // "Chunīn" or "chunān" starting at the third letter, spaces ignored
    if matches!(
        hem_nospace.get(2..6),
        Some(['چ', 'ن', 'ی', 'ن'] | ['چ', 'ن', 'ا', 'ن'])
    ) {
        return true;
    }

    // Opening "īn" plus a consonant, with a clearly short syllable after
    matches!(hem.get(..5), Some(['ا', 'ی', 'ن', ' ', c]) if is_consonant(*c))
        && short_first_syllable(rest(hem, 4))
}

/// A recognized opening word that pins down both syllable lengths.
pub(crate) fn opening_clue(hem: &[char]) -> Option<OpeningPattern> {
    // "Kasī" or "yakī" followed by a consonant
    if matches!(
        hem.get(..5),
        Some(['ک', 'س', 'ی', ' ', c] | ['ی', 'ک', 'ی', ' ', c]) if is_consonant(*c)
    ) {
        return Some(OpeningPattern::ShortLong);
    }

    // "Chīst," "kīst," "dūst": long-short regardless of what follows
    if matches!(
        hem.get(..4),
        Some(['چ', 'ی', 'س', 'ت'] | ['ک', 'ی', 'س', 'ت'] | ['د', 'و', 'س', 'ت'])
    ) {
        return Some(OpeningPattern::LongShort);
    }

    // "Nīst" followed by a space (without it, "nayistān" trips this up)
    if matches!(hem.get(..5), Some(['ن', 'ی', 'س', 'ت', ' '])) {
        return Some(OpeningPattern::LongShort);
    }

    // "Ham-chu" followed by a space, with or without an internal space
    if matches!(hem.get(..5), Some(['ه', 'م', 'چ', 'و', ' ']))
        || matches!(hem.get(..6), Some(['ه', 'م', ' ', 'چ', 'و', ' ']))
    {
        return Some(OpeningPattern::LongShort);
    }

    // "Chandān": long-long regardless of what follows
    if matches!(hem.get(..5), Some(['چ', 'ن', 'د', 'ا', 'ن'])) {
        return Some(OpeningPattern::LongLong);
    }

    None
}

/// The hemistich after its first `n` letters (empty when shorter).
fn rest(hem: &[char], n: usize) -> &[char] {
    hem.get(n..).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn nospace(s: &str) -> Vec<char> {
        s.chars().filter(|c| *c != ' ').collect()
    }

    #[test]
    fn initial_alif_maddah_marks_long_first() {
        assert!(long_first_syllable(&chars("آمد بهار")));
    }

    #[test]
    fn second_letter_alif_marks_long_first() {
        // "tā ..." — alif as second letter
        assert!(long_first_syllable(&chars("تا دل")));
    }

    #[test]
    fn initial_in_marks_long_first() {
        assert!(long_first_syllable(&chars("این جهان")));
    }

    #[test]
    fn az_plus_consonant_marks_long_first() {
        assert!(long_first_syllable(&chars("از دل برفت")));
        // "az" followed by a vowel letter does not fire this rule
        assert!(!long_first_syllable(&chars("از او شنیدم")));
    }

    #[test]
    fn bi_plus_space_marks_short_first() {
        assert!(short_first_syllable(&chars("به باغ رفتم")));
    }

    #[test]
    fn zih_plus_consonant_marks_short_first() {
        assert!(short_first_syllable(&chars("ز دست رفت")));
    }

    #[test]
    fn chunin_marks_short_first_and_long_second() {
        let hem = chars("چنین گفت");
        assert!(short_first_syllable(&hem));
        assert!(long_second_syllable(&hem));
    }

    #[test]
    fn third_letter_alif_marks_long_second() {
        // negār: alif in third position after a consonant
        assert!(long_second_syllable(&chars("نگار من")));
        // word-initial alif in third position does not fire
        assert!(!long_second_syllable(&chars("دل انگیز")));
    }

    #[test]
    fn short_hemistich_matches_nothing() {
        let hem = chars("دل");
        assert!(!long_first_syllable(&hem));
        assert!(!short_first_syllable(&hem));
        assert!(!long_second_syllable(&hem));
        assert!(!short_second_syllable(&hem, &nospace("دل")));
        assert!(opening_clue(&hem).is_none());
        assert!(!long_first_syllable(&[]));
    }

    #[test]
    fn gar_chi_marks_short_second() {
        let text = "گرچه دور از";
        assert!(short_second_syllable(&chars(text), &nospace(text)));
        let spaced = "گر چه دور از";
        assert!(short_second_syllable(&chars(spaced), &nospace(spaced)));
    }

    #[test]
    fn dust_opening_is_long_short() {
        assert_eq!(
            opening_clue(&chars("دوست دارم")),
            Some(OpeningPattern::LongShort)
        );
    }

    #[test]
    fn kasi_needs_a_consonant_after() {
        assert_eq!(
            opening_clue(&chars("کسی ندید")),
            Some(OpeningPattern::ShortLong)
        );
        assert_eq!(opening_clue(&chars("کسی آمد")), None);
    }

    #[test]
    fn chandan_opening_is_long_long() {
        assert_eq!(
            opening_clue(&chars("چندان بگفت")),
            Some(OpeningPattern::LongLong)
        );
    }
}
