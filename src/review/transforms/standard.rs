//! Standard transform definitions
//!
//! The review normalization pipeline, pre-built as a static using
//! `once_cell::sync::Lazy`, plus the two entry points built on it.

use crate::review::transforms::stages::{
    LetterDigits, PunctuationSpacing, SentenceCase, ShoutFolding, StageKind,
};
use crate::review::transforms::Transform;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Type alias for a text-to-text transform
pub type TextTransform = Transform<String, String>;

/// Full normalization transform: String → String
///
/// 1. Shout folding
/// 2. Sentence case
/// 3. Punctuation spacing
/// 4. Letter-to-digit substitution
///
/// # Example
///
/// ```rust
/// use review_text::review::transforms::standard::NORMALIZE;
///
/// assert_eq!(NORMALIZE.run("Hello   .World".to_string()), "7ello.2orld");
/// ```
pub static NORMALIZE: Lazy<TextTransform> = Lazy::new(|| {
    Transform::from_fn(|s: String| s)
        .then(ShoutFolding::new())
        .then(SentenceCase::new())
        .then(PunctuationSpacing::new())
        .then(LetterDigits::new())
});

/// Normalize review text
///
/// Total and side-effect free: any input, including the empty string, produces
/// an output and the result depends only on `text`.
pub fn normalize(text: &str) -> String {
    NORMALIZE.run(text.to_string())
}

/// Text as it stands after one stage of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutput {
    pub stage: StageKind,
    pub text: String,
}

/// Run the pipeline one stage at a time, recording each intermediate result
///
/// The last entry always equals [`normalize`] of the same input.
pub fn trace(text: &str) -> Vec<StageOutput> {
    let mut outputs: Vec<StageOutput> = Vec::with_capacity(StageKind::ALL.len());
    let mut current = text.to_string();

    for stage in StageKind::ALL {
        current = stage.apply(current);
        tracing::trace!(stage = %stage, len = current.len(), "stage complete");
        outputs.push(StageOutput {
            stage,
            text: current.clone(),
        });
    }

    outputs
}
