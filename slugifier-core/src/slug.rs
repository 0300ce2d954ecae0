//! The slug transform.
//!
//! Pipeline, in order:
//! 1. every separator-like character (`-`, `_`) becomes a space, and common
//!    symbols (`&`, `$`, `%`, ...) become the word they stand for
//! 2. transliterate to ASCII, lowercase
//! 3. each run of whitespace or disallowed characters becomes one separator
//! 4. anything outside `[a-z0-9]` and the separator is dropped
//! 5. cut to `limit` characters (may split a word or leave a separator)
//! 6. trim separators from both ends of what is left

use deunicode::deunicode_with_tofu;

use crate::params::Separator;

/// Symbols spelled out as words rather than dropped. Checked before
/// transliteration, which would otherwise abbreviate or discard them.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', "and"),
    ('$', "dollar"),
    ('%', "percent"),
    ('<', "less"),
    ('>', "greater"),
    ('|', "or"),
    ('¢', "cent"),
    ('£', "pound"),
    ('¤', "currency"),
    ('¥', "yen"),
    ('€', "euro"),
    ('₹', "rupee"),
    ('₽', "ruble"),
    ('₿', "bitcoin"),
    ('♥', "love"),
    ('∞', "infinity"),
];

fn symbol_word(c: char) -> Option<&'static str> {
    SYMBOL_WORDS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, word)| *word)
}

/// Convert `text` to a slug of at most `limit` characters.
///
/// Total over all inputs: empty or whitespace-only text yields an empty
/// string, and the result only ever contains `[a-z0-9]` and `separator`.
pub fn normalize(text: &str, separator: Separator, limit: usize) -> String {
    let sep = separator.as_char();

    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if Separator::is_separator_like(c) {
            cleaned.push(' ');
        } else if let Some(word) = symbol_word(c) {
            cleaned.push(' ');
            cleaned.push_str(word);
            cleaned.push(' ');
        } else {
            cleaned.push(c);
        }
    }

    // Characters with no known transliteration act as a word break.
    let ascii = deunicode_with_tofu(&cleaned, " ");

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;

    for c in ascii.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !slug.is_empty() {
                slug.push(sep);
            }
            slug.push(c);
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }

    // ASCII only from here on, so a byte cut is a character cut.
    slug.truncate(limit);
    slug.trim_matches(sep).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DASH: Separator = Separator::Dash;
    const UNDERSCORE: Separator = Separator::Underscore;

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize("", DASH, 60), "");
        assert_eq!(normalize("", UNDERSCORE, 10), "");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(normalize("   \t\n ", DASH, 60), "");
    }

    #[test]
    fn basic_words() {
        assert_eq!(normalize("Hello World", DASH, 60), "hello-world");
    }

    #[test]
    fn underscore_separator() {
        assert_eq!(normalize("Hello World", UNDERSCORE, 60), "hello_world");
    }

    #[test]
    fn existing_separators_collapse() {
        assert_eq!(normalize("Hello---World__Foo", DASH, 60), "hello-world-foo");
        assert_eq!(
            normalize("Hello---World__Foo", UNDERSCORE, 60),
            "hello_world_foo"
        );
    }

    #[test]
    fn accented_letters_transliterate() {
        assert_eq!(normalize("café déjà vu", DASH, 60), "cafe-deja-vu");
        assert_eq!(normalize("Straße", DASH, 60), "strasse");
    }

    #[test]
    fn symbols_become_words() {
        assert_eq!(normalize("Tom & Jerry", DASH, 60), "tom-and-jerry");
        assert_eq!(normalize("5 $ bill", DASH, 60), "5-dollar-bill");
        assert_eq!(normalize("100% cotton", DASH, 60), "100-percent-cotton");
        assert_eq!(normalize("a<b", UNDERSCORE, 60), "a_less_b");
        assert_eq!(normalize("I ♥ €5", DASH, 60), "i-love-euro-5");
    }

    #[test]
    fn cyrillic_transliterates() {
        assert_eq!(normalize("Привет мир", DASH, 60), "privet-mir");
    }

    #[test]
    fn punctuation_becomes_separator() {
        assert_eq!(normalize("Fix Bug #1!", DASH, 60), "fix-bug-1");
        assert_eq!(normalize("a.b,c", DASH, 60), "a-b-c");
    }

    #[test]
    fn leading_and_trailing_noise_trimmed() {
        assert_eq!(normalize("  --hello--  ", DASH, 60), "hello");
        assert_eq!(normalize("!!!hello???", UNDERSCORE, 60), "hello");
    }

    #[test]
    fn truncation_cuts_mid_word() {
        let out = normalize("a very long sentence that exceeds the limit", DASH, 15);
        assert_eq!(out, "a-very-long-sen");
        assert!(out.len() <= 15);
    }

    #[test]
    fn truncation_trims_dangling_separator() {
        // The cut lands right after a separator.
        let out = normalize("a very long sentence that exceeds the limit", DASH, 12);
        assert_eq!(out, "a-very-long");
    }

    #[test]
    fn zero_limit_is_empty() {
        assert_eq!(normalize("hello", DASH, 0), "");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(normalize("Top 10 Tips 2024", DASH, 60), "top-10-tips-2024");
    }

    fn separator() -> impl Strategy<Value = Separator> {
        prop_oneof![Just(Separator::Dash), Just(Separator::Underscore)]
    }

    proptest! {
        #[test]
        fn never_exceeds_limit(text in any::<String>(), sep in separator(), limit in 10usize..120) {
            prop_assert!(normalize(&text, sep, limit).chars().count() <= limit);
        }

        #[test]
        fn no_separator_at_edges(text in any::<String>(), sep in separator(), limit in 10usize..120) {
            let out = normalize(&text, sep, limit);
            prop_assert!(!out.starts_with(sep.as_char()));
            prop_assert!(!out.ends_with(sep.as_char()));
        }

        #[test]
        fn only_allowed_characters(text in any::<String>(), sep in separator(), limit in 10usize..120) {
            let out = normalize(&text, sep, limit);
            prop_assert!(out
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == sep.as_char()));
        }

        #[test]
        fn renormalizing_is_stable(text in any::<String>(), sep in separator(), limit in 10usize..120) {
            let once = normalize(&text, sep, limit);
            prop_assert_eq!(normalize(&once, sep, limit), once);
        }
    }
}
