//! Property tests for filename sanitization.

use article2post::{sanitize_filename, sanitize_filename_with};
use proptest::prelude::*;

const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

proptest! {
    #[test]
    fn output_has_no_forbidden_or_control_characters(s in any::<String>()) {
        let name = sanitize_filename(&s);
        prop_assert!(!name.chars().any(|c| FORBIDDEN.contains(&c)), "{:?}", name);
        prop_assert!(!name.chars().any(|c| c.is_control()), "{:?}", name);
        prop_assert!(name.is_ascii());
    }

    #[test]
    fn sanitizing_is_idempotent(s in any::<String>()) {
        let once = sanitize_filename(&s);
        prop_assert_eq!(sanitize_filename(&once), once);
    }

    #[test]
    fn length_never_exceeds_the_cap(s in "\\PC{0,400}", max in 0usize..300) {
        let name = sanitize_filename_with(&s, '_', max);
        prop_assert!(name.len() <= max);
        prop_assert_eq!(sanitize_filename_with(&name, '_', max), name.clone());
    }

    #[test]
    fn long_titles_fit_default_cap(s in "[a-zA-Z0-9 ]{256,600}") {
        prop_assert!(sanitize_filename(&s).len() <= 255);
    }

    #[test]
    fn no_leading_or_trailing_dots_or_spaces(s in any::<String>()) {
        let name = sanitize_filename(&s);
        for edge in [name.chars().next(), name.chars().last()].into_iter().flatten() {
            prop_assert!(edge != '.' && !edge.is_whitespace(), "{:?}", name);
        }
    }

    #[test]
    fn any_replacement_keeps_output_safe_and_stable(s in any::<String>(), replacement in any::<char>()) {
        let once = sanitize_filename_with(&s, replacement, 255);
        prop_assert!(!once.chars().any(|c| FORBIDDEN.contains(&c) || c.is_control()), "{:?}", once);
        prop_assert!(once.is_ascii());
        prop_assert_eq!(sanitize_filename_with(&once, replacement, 255), once.clone());
    }

    #[test]
    fn replacement_never_repeats(s in any::<String>()) {
        prop_assert!(!sanitize_filename(&s).contains("__"));
    }
}
