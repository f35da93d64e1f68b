//! Shout folding stage
//!
//! If the text contains a run of [`SHOUT_RUN_LENGTH`] or more uppercase letters
//! anywhere, the whole text is lowercased. The decision is global and binary.
//!
//! "Uppercase letter" is the union of Latin `A-Z`, Cyrillic `А-Я` and `Ё`. A run
//! may mix scripts: `"ABCДЕ"` counts as five.

use crate::review::transforms::Runnable;

/// Minimum run of consecutive uppercase letters that counts as shouting
pub const SHOUT_RUN_LENGTH: usize = 5;

/// Whether `c` belongs to the uppercase class used for shout detection
pub fn is_shout_letter(c: char) -> bool {
    c.is_ascii_uppercase() || ('А'..='Я').contains(&c) || c == 'Ё'
}

/// Whether `text` contains at least [`SHOUT_RUN_LENGTH`] consecutive shout letters
pub fn contains_shout_run(text: &str) -> bool {
    let mut run = 0;
    for c in text.chars() {
        if is_shout_letter(c) {
            run += 1;
            if run >= SHOUT_RUN_LENGTH {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// Shout folding stage
///
/// # Input
/// - `String` - raw review text
///
/// # Output
/// - `String` - fully lowercased if a shout run was found, otherwise unchanged
pub struct ShoutFolding;

impl ShoutFolding {
    pub fn new() -> Self {
        ShoutFolding
    }
}

impl Default for ShoutFolding {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for ShoutFolding {
    fn run(&self, input: String) -> String {
        if contains_shout_run(&input) {
            tracing::debug!(chars = input.chars().count(), "shout run found, lowercasing text");
            input.to_lowercase()
        } else {
            input
        }
    }
}

impl Runnable<&str, String> for ShoutFolding {
    fn run(&self, input: &str) -> String {
        Runnable::<String, String>::run(self, input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(text: &str) -> String {
        ShoutFolding::new().run(text)
    }

    #[test]
    fn test_four_letters_do_not_trigger() {
        assert!(!contains_shout_run("ABCD efg"));
        assert_eq!(fold("ABCD efg"), "ABCD efg");
    }

    #[test]
    fn test_five_letters_trigger() {
        assert!(contains_shout_run("ABCDE"));
        assert_eq!(fold("ABCDE Efg"), "abcde efg");
    }

    #[test]
    fn test_cyrillic_run_lowercases_everything() {
        assert_eq!(
            fold("ЭТОСЛОВОКРИЧИТ. а это нет"),
            "этословокричит. а это нет"
        );
    }

    #[test]
    fn test_yo_counts_as_uppercase() {
        assert!(is_shout_letter('Ё'));
        assert!(contains_shout_run("ЁЛКИН"));
    }

    #[test]
    fn test_mixed_script_run_counts() {
        assert!(contains_shout_run("ABCДЕ"));
    }

    #[test]
    fn test_run_must_be_contiguous() {
        assert!(!contains_shout_run("ABC DEF"));
        assert!(!contains_shout_run("AB1CDE"));
        assert!(!contains_shout_run("ABCD-EFGH"));
    }

    #[test]
    fn test_other_uppercase_scripts_are_ignored() {
        // Greek capitals are outside the class
        assert!(!contains_shout_run("ΑΒΓΔΕ"));
        assert_eq!(fold("ΑΒΓΔΕ"), "ΑΒΓΔΕ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fold(""), "");
    }
}
