//! Punctuation spacing stage
//!
//! Removes every whitespace run that sits directly in front of one of
//! `. , ! ? ; :`. Whitespace anywhere else, including after punctuation, is kept.

use crate::review::segmentation::is_review_whitespace;
use crate::review::transforms::Runnable;

/// Whether whitespace in front of `c` should be removed
pub fn is_spaced_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':')
}

/// Punctuation spacing stage
///
/// # Input
/// - `String` - text from the sentence case stage
///
/// # Output
/// - `String` - text with no whitespace before punctuation marks
pub struct PunctuationSpacing;

impl PunctuationSpacing {
    pub fn new() -> Self {
        PunctuationSpacing
    }
}

impl Default for PunctuationSpacing {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for PunctuationSpacing {
    fn run(&self, input: String) -> String {
        let mut out = String::with_capacity(input.len());
        // Start of the whitespace run we have not yet decided about
        let mut pending: Option<usize> = None;

        for (idx, c) in input.char_indices() {
            if is_review_whitespace(c) {
                pending.get_or_insert(idx);
                continue;
            }
            if let Some(start) = pending.take() {
                if !is_spaced_punctuation(c) {
                    out.push_str(&input[start..idx]);
                }
            }
            out.push(c);
        }

        if let Some(start) = pending {
            out.push_str(&input[start..]);
        }

        out
    }
}

impl Runnable<&str, String> for PunctuationSpacing {
    fn run(&self, input: &str) -> String {
        Runnable::<String, String>::run(self, input.to_string())
    }
}
