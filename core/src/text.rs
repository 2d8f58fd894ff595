use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Symbols treated as punctuation on top of ASCII digits and the Unicode
/// `Punctuation` general category. Includes the low double quotation mark,
/// which some sources use as an opening quote.
const EXTRA_PUNCTUATION: &str = "!@#$%^&*()-=_+\u{201e}";

/// Whether a passage character is permanently visible and excluded from all
/// guess matching. Pure and stateless.
pub fn is_puzzle_punctuation(ch: char) -> bool {
    ch.is_ascii_digit()
        || EXTRA_PUNCTUATION.contains(ch)
        || ch.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Accent-folds one character for comparison: canonical decomposition,
/// combining marks stripped, uppercased, first remaining scalar. `None` when
/// nothing survives (e.g. a lone combining mark). Folding is only ever used
/// for matching; displayed glyphs keep their accents.
pub fn fold_char(ch: char) -> Option<char> {
    core::iter::once(ch)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_symbol_set_are_punctuation() {
        for ch in "0123456789!@#$%^&*()-=_+".chars() {
            assert!(is_puzzle_punctuation(ch), "{ch:?}");
        }
    }

    #[test]
    fn unicode_punctuation_category_is_recognized() {
        assert!(is_puzzle_punctuation('„'));
        assert!(is_puzzle_punctuation('—'));
        assert!(is_puzzle_punctuation(','));
        assert!(is_puzzle_punctuation('\''));
    }

    #[test]
    fn letters_and_spaces_are_not_punctuation() {
        assert!(!is_puzzle_punctuation('a'));
        assert!(!is_puzzle_punctuation('é'));
        assert!(!is_puzzle_punctuation(' '));
    }

    #[test]
    fn fold_strips_accents_and_uppercases() {
        assert_eq!(fold_char('é'), Some('E'));
        assert_eq!(fold_char('Å'), Some('A'));
        assert_eq!(fold_char('ç'), Some('C'));
        assert_eq!(fold_char('a'), Some('A'));
        assert_eq!(fold_char('Z'), Some('Z'));
    }

    #[test]
    fn fold_of_lone_combining_mark_is_none() {
        assert_eq!(fold_char('\u{0301}'), None);
    }
}
