//! Property-based tests for the normalization pipeline
//!
//! These cover the guarantees that hold for every input rather than for
//! hand-picked examples: the pipeline never panics, re-normalizing is a fixed
//! point (unless a sentence starts with a letter whose capital is several
//! characters), and the letter-to-digit stage leaves everything but `A-Z` alone.

use proptest::prelude::*;
use review_text::review::segmentation::{is_review_whitespace, segment};
use review_text::review::transforms::stages::digits::LetterDigits;
use review_text::review::transforms::stages::punctuation::is_spaced_punctuation;
use review_text::review::transforms::stages::shout::{contains_shout_run, SHOUT_RUN_LENGTH};
use review_text::review::transforms::Runnable;
use review_text::{normalize, trace};

/// Review-like text: mixed-case Latin and Cyrillic, digits, spaces and punctuation
fn review_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Zа-яА-ЯёЁ0-9 ,.!?;:\n]{0,80}",
        "[a-zа-яё ]{0,20}[.!?]{1,3}[ ]{0,3}[A-ZА-Я][a-zа-я ,]{0,20}",
        "[ \t]{0,3}[a-zа-я]{1,10}[ \t]{1,3}[,;:]",
    ]
}

/// Lowercase padding around a run of capitals
fn padded_run_strategy(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    (
        "[a-zа-я ]{0,10}",
        prop::collection::vec(prop::sample::select(vec!['A', 'Q', 'Z', 'А', 'Ж', 'Я', 'Ё']), len),
        "[a-zа-я ]{0,10}",
    )
        .prop_map(|(before, run, after)| {
            format!("{before} {} {after}", run.into_iter().collect::<String>())
        })
}

/// Whether some sentence body starts with a character whose uppercase form is
/// more than one character (`ß`, `ᾳ`), which a second pass would partly lowercase
fn has_expanding_initial(text: &str) -> bool {
    segment(text).iter().any(|sentence| {
        sentence
            .body
            .trim_matches(is_review_whitespace)
            .chars()
            .next()
            .is_some_and(|first| first.to_uppercase().count() > 1)
    })
}

proptest! {
    #[test]
    fn normalize_never_panics(input in "\\PC*") {
        let _ = normalize(&input);
    }

    #[test]
    fn normalized_text_is_a_fixed_point(input in "\\PC*") {
        prop_assume!(!has_expanding_initial(&trace(&input)[0].text));
        let once = normalize(&input);
        prop_assume!(!contains_shout_run(&once));
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn review_like_text_is_a_fixed_point(input in review_text_strategy()) {
        let once = normalize(&input);
        prop_assume!(!contains_shout_run(&once));
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn output_has_no_uppercase_latin(input in "\\PC*") {
        let out = normalize(&input);
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()), "got {:?}", out);
    }

    #[test]
    fn output_has_no_whitespace_before_punctuation(input in review_text_strategy()) {
        let out: Vec<char> = normalize(&input).chars().collect();
        for pair in out.windows(2) {
            prop_assert!(
                !(pair[0].is_whitespace() && is_spaced_punctuation(pair[1])),
                "whitespace before {:?}",
                pair[1]
            );
        }
    }

    #[test]
    fn letter_digits_only_touches_uppercase_latin(input in "\\PC*") {
        let out = LetterDigits::new().run(input.as_str());
        prop_assert_eq!(out.chars().count(), input.chars().count());
        for (before, after) in input.chars().zip(out.chars()) {
            if before.is_ascii_uppercase() {
                prop_assert!(after.is_ascii_digit());
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn trace_ends_with_normalize(input in review_text_strategy()) {
        let outputs = trace(&input);
        prop_assert_eq!(outputs.len(), 4);
        prop_assert_eq!(outputs[3].text.clone(), normalize(&input));
    }

    #[test]
    fn short_runs_never_shout(input in padded_run_strategy(1..=SHOUT_RUN_LENGTH - 1)) {
        prop_assert!(!contains_shout_run(&input));
    }

    #[test]
    fn long_runs_always_shout(input in padded_run_strategy(SHOUT_RUN_LENGTH..=12)) {
        prop_assert!(contains_shout_run(&input));
        let lowered = trace(&input)[0].text.clone();
        prop_assert_eq!(lowered, input.to_lowercase());
    }
}
