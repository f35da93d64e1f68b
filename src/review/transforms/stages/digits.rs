//! Letter-to-digit stage
//!
//! Replaces every uppercase Latin letter with a digit from [`LETTER_DIGITS`].
//! Lowercase letters, other scripts and non-letters are never touched.

use crate::review::transforms::Runnable;

/// Digit for each of `A..=Z`, indexed by letter position
///
/// The table repeats `0..=9`, so the digit is the letter index modulo ten.
pub const LETTER_DIGITS: [char; 26] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', // A-J
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', // K-T
    '0', '1', '2', '3', '4', '5', // U-Z
];

/// The digit replacing `c`, or `None` if `c` is not in `A..=Z`
pub fn letter_digit(c: char) -> Option<char> {
    if c.is_ascii_uppercase() {
        Some(LETTER_DIGITS[(c as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Letter-to-digit stage
///
/// # Input
/// - `String` - text from the punctuation spacing stage
///
/// # Output
/// - `String` - text with `A..=Z` replaced by digits
pub struct LetterDigits;

impl LetterDigits {
    pub fn new() -> Self {
        LetterDigits
    }
}

impl Default for LetterDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for LetterDigits {
    fn run(&self, input: String) -> String {
        if !input.bytes().any(|b| b.is_ascii_uppercase()) {
            return input;
        }
        input
            .chars()
            .map(|c| letter_digit(c).unwrap_or(c))
            .collect()
    }
}

impl Runnable<&str, String> for LetterDigits {
    fn run(&self, input: &str) -> String {
        Runnable::<String, String>::run(self, input.to_string())
    }
}
