//! Pure functions for filename generation.
//!
//! This module handles all path-related operations without
//! performing any I/O operations.

use crate::constants::{FILENAME_MAX_LENGTH, FILENAME_REPLACEMENT, UNTITLED_FILENAME};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use unicode_normalization::UnicodeNormalization;

/// Characters rejected by at least one common filesystem, plus ASCII controls.
static FORBIDDEN_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[<>:"/\\|?*\x00-\x1F\x7F]"#).expect("forbidden character pattern is valid")
});

/// Sanitizes a string to be safe for use as a filename, using `_` and a
/// 255 character limit.
pub fn sanitize_filename(name: &str) -> String {
    sanitize_filename_with(name, FILENAME_REPLACEMENT, FILENAME_MAX_LENGTH)
}

/// Sanitizes a string with an explicit replacement character and length cap.
///
/// Steps run in a fixed order: decompose and drop non-ASCII, replace
/// forbidden characters, trim whitespace and periods, collapse runs of the
/// replacement, truncate. Trimming is repeated after truncation so that
/// sanitizing twice gives the same result as sanitizing once.
///
/// The replacement is folded to ASCII the same way as the name; one that
/// folds to nothing, or to a forbidden character, becomes `_`.
pub fn sanitize_filename_with(name: &str, replacement: char, max_length: usize) -> String {
    let replacement = fold_replacement(replacement);
    let ascii: String = name.nfkd().filter(char::is_ascii).collect();

    let mut buf = [0u8; 4];
    let replaced = FORBIDDEN_CHARS.replace_all(&ascii, NoExpand(replacement.encode_utf8(&mut buf)));

    let trimmed = trim_name(&replaced);
    let collapsed = collapse_runs(trimmed, replacement);

    let truncated: String = collapsed.chars().take(max_length).collect();
    trim_name(&truncated).to_string()
}

/// Name of the file an article with `title` is written to.
pub fn article_file_name(title: &str) -> String {
    let name = sanitize_filename(title);
    if name.is_empty() {
        UNTITLED_FILENAME.to_string()
    } else {
        name
    }
}

fn fold_replacement(replacement: char) -> char {
    let mut buf = [0u8; 4];
    replacement
        .encode_utf8(&mut buf)
        .nfkd()
        .find(char::is_ascii)
        .filter(|c| !FORBIDDEN_CHARS.is_match(c.encode_utf8(&mut [0u8; 4])))
        .unwrap_or(FILENAME_REPLACEMENT)
}

fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '.')
}

fn collapse_runs(name: &str, replacement: char) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous = None;
    for c in name.chars() {
        if c == replacement && previous == Some(replacement) {
            continue;
        }
        out.push(c);
        previous = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Hello/World"), "Hello_World");
        assert_eq!(sanitize_filename("Test:File*Name"), "Test_File_Name");
        assert_eq!(sanitize_filename("   spaces   "), "spaces");
        assert_eq!(sanitize_filename("...dots..."), "dots");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn accents_are_decomposed_to_ascii() {
        assert_eq!(sanitize_filename("Café résumé"), "Cafe resume");
        assert_eq!(sanitize_filename("日本語"), "");
    }

    #[test]
    fn runs_of_replacements_collapse() {
        assert_eq!(sanitize_filename("a<>:b"), "a_b");
        assert_eq!(sanitize_filename("What is Rust? A \"guide\""), "What is Rust_ A _guide_");
        assert_eq!(sanitize_filename("tab\there"), "tab_here");
    }

    #[test]
    fn custom_replacement_and_length() {
        assert_eq!(sanitize_filename_with("a/b/c", '-', 255), "a-b-c");
        assert_eq!(sanitize_filename_with("abcdef", '_', 3), "abc");
    }

    #[test]
    fn replacement_is_folded_to_ascii() {
        let once = sanitize_filename_with("a/b", 'é', 255);
        assert_eq!(once, "aeb");
        assert_eq!(sanitize_filename_with(&once, 'é', 255), once);
        assert_eq!(sanitize_filename_with("a/b", '語', 255), "a_b");
        assert_eq!(sanitize_filename_with("a:b", '/', 255), "a_b");
    }

    #[test]
    fn truncation_does_not_leave_trailing_period() {
        assert_eq!(sanitize_filename_with("ab. cd", '_', 3), "ab");
    }

    #[test]
    fn empty_titles_get_placeholder_file_name() {
        assert_eq!(article_file_name("..."), UNTITLED_FILENAME);
        assert_eq!(article_file_name("Rust: Ownership"), "Rust_ Ownership");
    }
}
