//! Sentence case stage
//!
//! Recapitalizes each sentence body independently: the body is trimmed, its first
//! character uppercased and the remainder lowercased. Empty bodies vanish while
//! their terminators are still emitted, and terminators pass through verbatim.
//!
//! Pieces are concatenated with no separator, so whitespace that followed a
//! terminator in the input does not survive: `"one. two"` becomes `"One.Two"`.

use crate::review::segmentation::{is_review_whitespace, segment};
use crate::review::transforms::Runnable;

/// Sentence case stage
///
/// # Input
/// - `String` - text from the shout folding stage
///
/// # Output
/// - `String` - text with every sentence body recapitalized
pub struct SentenceCase;

impl SentenceCase {
    pub fn new() -> Self {
        SentenceCase
    }
}

impl Default for SentenceCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `body` to `out` with its first character uppercased and the rest lowercased
fn push_capitalized(out: &mut String, body: &str) {
    let mut chars = body.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

impl Runnable<String, String> for SentenceCase {
    fn run(&self, input: String) -> String {
        let mut out = String::with_capacity(input.len());

        for sentence in segment(&input) {
            push_capitalized(&mut out, sentence.body.trim_matches(is_review_whitespace));
            if let Some(terminator) = sentence.terminator {
                out.push_str(terminator);
            }
        }

        out
    }
}

impl Runnable<&str, String> for SentenceCase {
    fn run(&self, input: &str) -> String {
        Runnable::<String, String>::run(self, input.to_string())
    }
}
