//! Individual normalization stages
//!
//! This module contains the stages that make up the review pipeline. Each stage
//! implements the `Runnable` trait. They must run in the order of
//! [`StageKind::ALL`]: every stage sees exactly the output of the one before it.

pub mod digits;
pub mod punctuation;
pub mod sentences;
pub mod shout;

pub use digits::LetterDigits;
pub use punctuation::PunctuationSpacing;
pub use sentences::SentenceCase;
pub use shout::ShoutFolding;

use serde::Serialize;
use std::fmt;

/// Identifies a pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageKind {
    ShoutFolding,
    SentenceCase,
    PunctuationSpacing,
    LetterDigits,
}

impl StageKind {
    /// All stages in pipeline order
    pub const ALL: [StageKind; 4] = [
        StageKind::ShoutFolding,
        StageKind::SentenceCase,
        StageKind::PunctuationSpacing,
        StageKind::LetterDigits,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StageKind::ShoutFolding => "shout-folding",
            StageKind::SentenceCase => "sentence-case",
            StageKind::PunctuationSpacing => "punctuation-spacing",
            StageKind::LetterDigits => "letter-digits",
        }
    }

    /// Run just this stage on `input`
    pub fn apply(self, input: String) -> String {
        use crate::review::transforms::Runnable;

        match self {
            StageKind::ShoutFolding => ShoutFolding::new().run(input),
            StageKind::SentenceCase => SentenceCase::new().run(input),
            StageKind::PunctuationSpacing => PunctuationSpacing::new().run(input),
            StageKind::LetterDigits => LetterDigits::new().run(input),
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
