//! Review text as submitted, paired with its normalized form

use crate::review::transforms::standard::normalize;
use serde::Serialize;

/// The original review text and the output of the normalization pipeline
///
/// `processed` is computed once, in [`ReviewText::new`], and there is no way to
/// change either field afterwards, so `processed == normalize(original)` always
/// holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewText {
    original: String,
    processed: String,
}

impl ReviewText {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let processed = normalize(&original);
        ReviewText {
            original,
            processed,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn processed(&self) -> &str {
        &self.processed
    }

    /// Consume into `(original, processed)`
    pub fn into_parts(self) -> (String, String) {
        (self.original, self.processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processed_is_normalized_original() {
        let text = ReviewText::new("Hello   .World");
        assert_eq!(text.original(), "Hello   .World");
        assert_eq!(text.processed(), "7ello.2orld");
    }

    #[test]
    fn test_into_parts() {
        let (original, processed) = ReviewText::new("привет мир").into_parts();
        assert_eq!(original, "привет мир");
        assert_eq!(processed, "Привет мир");
    }

    #[test]
    fn test_serializes_both_forms() {
        let json = serde_json::to_value(ReviewText::new("!!!")).unwrap();
        assert_eq!(json["original"], "!!!");
        assert_eq!(json["processed"], "!!!");
    }
}
