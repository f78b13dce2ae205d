//! Word-level helpers shared by the scanner and the report checks.

use alloc::borrow::Cow;

/// Number of Unicode code points in `word`.
///
/// Minimum-length options are expressed in letters, not bytes, so a word
/// such as `café` has length 4.
#[must_use]
pub fn letter_len(word: &str) -> usize {
    word.chars().count()
}

/// Lowercases `word` when `ignore_case` is set, borrowing otherwise.
#[must_use]
pub fn fold_case(word: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case && word.chars().any(|c| c.to_lowercase().ne(core::iter::once(c))) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_len_counts_code_points() {
        assert_eq!(letter_len("cat"), 3);
        assert_eq!(letter_len("café"), 4);
        assert_eq!(letter_len("naïve-ish"), 9);
        assert_eq!(letter_len(""), 0);
    }

    #[test]
    fn fold_case_borrows_when_nothing_to_do() {
        assert!(matches!(fold_case("The", false), Cow::Borrowed("The")));
        assert!(matches!(fold_case("the", true), Cow::Borrowed("the")));
    }

    #[test]
    fn fold_case_lowercases_unicode() {
        assert_eq!(fold_case("CAT", true), "cat");
        assert_eq!(fold_case("ÉTÉ", true), "été");
    }

    #[test]
    fn fold_case_lowercases_titlecase_letters() {
        assert_eq!(fold_case("\u{01C5}emal", true), "\u{01C6}emal");
        assert_eq!(fold_case("\u{01C8}ubav", true), "\u{01C9}ubav");
        assert_eq!(fold_case("\u{1F88}", true), "\u{1F80}");
    }
}
