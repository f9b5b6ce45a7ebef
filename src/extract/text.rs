// src/extract/text.rs
// =============================================================================
// Text normalization for extracted page content.
//
// Two passes:
// 1. Collapse every run of whitespace (spaces, tabs, newlines) into a single
//    space and trim both ends
// 2. Drop every character that is not a word character, whitespace, or one
//    of . , ; : ? ! ( ) " -
//
// Dropping characters can leave two spaces side by side ("a & b" -> "a  b")
// or a space at either end, so the whitespace pass runs once more at the end.
// That final pass makes normalize() idempotent.
//
// Rust concepts:
// - LazyLock: compile each regex once, on first use
// - Cow<str>: Regex::replace_all only allocates when something changed
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// \w and \s are Unicode-aware in the regex crate, so Vietnamese letters
// with diacritics count as word characters and survive.
static DISALLOWED_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^\w\s.,;:?!()"-]"#).expect("character filter pattern is valid")
});

/// Cleans extracted text for the output document.
///
/// Total and pure: every input produces an output, and the output of one
/// call is returned unchanged by the next.
pub fn normalize(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let filtered = DISALLOWED_CHAR.replace_all(&collapsed, "");
    collapse_whitespace(&filtered)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  Cây\n\n  lúa\t\tViệt Nam  "), "Cây lúa Việt Nam");
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        let text = r#"Giống lúa (IR64): năng suất cao, "ổn định"; tốt? Rất tốt! 5.5-6 tấn"#;
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_strips_other_symbols() {
        assert_eq!(normalize("a & b © 2024 | c*d"), "a b 2024 cd");
    }

    #[test]
    fn test_removed_symbol_at_edge_leaves_no_space() {
        assert_eq!(normalize("» Trang chủ «"), "Trang chủ");
    }

    #[test]
    fn test_underscore_and_digits_are_word_characters() {
        assert_eq!(normalize("snake_case 42"), "snake_case 42");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize("@#$%"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain text",
            "  a  &  b  ",
            "x @ y\n\n# z",
            "Kỹ thuật canh tác — phần 2 / 3",
            "«quoted» [brackets] {braces}",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
