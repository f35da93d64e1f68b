//! # review-text
//!
//! Deterministic normalization for free-form review text.
//!
//! Raw text runs through four stages, always in this order:
//!
//! 1. shout folding: a run of five or more capitals lowercases everything
//! 2. sentence case: every sentence body gets a capital first letter
//! 3. punctuation spacing: whitespace before `. , ! ? ; :` is dropped
//! 4. letter digits: uppercase `A-Z` become digits
//!
//! [`normalize`] is the single entry point most callers need. The stages and the
//! transform machinery live under [`review::transforms`].

pub mod review;

pub use review::submission::{LengthGate, Submission, SubmissionError};
pub use review::text::ReviewText;
pub use review::transforms::standard::{normalize, trace, StageOutput};
