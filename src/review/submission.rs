//! Review submission workflow
//!
//! A submission is accepted only when the original text passes the
//! [`LengthGate`]. Accepted text is normalized exactly once, when the
//! [`ReviewText`] is built, and stored next to the caller-supplied context
//! (doctor, origin address, user), which is passed through untouched.

use crate::review::text::ReviewText;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Shortest accepted review, in characters of the original text
pub const MIN_REVIEW_CHARS: usize = 100;

/// Format used for dates in [`ReviewSummary`]
pub const SUMMARY_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Error returned when a submission is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The original text is shorter than the gate allows
    TooShort { length: usize, minimum: usize },
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::TooShort { length, minimum } => write!(
                f,
                "review must be at least {} characters (got {})",
                minimum, length
            ),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Minimum-length check applied to the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthGate {
    minimum: usize,
}

impl LengthGate {
    pub fn new(minimum: usize) -> Self {
        LengthGate { minimum }
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    /// Length is counted in `char`s, not bytes
    pub fn check(&self, text: &str) -> Result<(), SubmissionError> {
        let length = text.chars().count();
        if length < self.minimum {
            return Err(SubmissionError::TooShort {
                length,
                minimum: self.minimum,
            });
        }
        Ok(())
    }
}

impl Default for LengthGate {
    fn default() -> Self {
        Self::new(MIN_REVIEW_CHARS)
    }
}

/// Resolve the address a submission came from
///
/// The first entry of a forwarded-for header wins when present; otherwise the
/// remote address is used. Values that do not parse as an IP address give `None`.
pub fn origin_address(forwarded_for: Option<&str>, remote_addr: Option<&str>) -> Option<IpAddr> {
    let forwarded = forwarded_for
        .and_then(|header| header.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty());

    forwarded
        .or_else(|| remote_addr.map(str::trim))
        .and_then(|addr| addr.parse().ok())
}

/// An accepted review together with its submission context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub doctor_id: u64,
    pub text: ReviewText,
    pub submitted_at: DateTime<Utc>,
    pub origin: Option<IpAddr>,
    pub user: Option<String>,
}

/// The shape recent reviews are listed in: processed text and a display date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub text: String,
    pub date: String,
}

impl Submission {
    /// Validate `original` and build a submission stamped with the current time
    pub fn accept(
        gate: &LengthGate,
        doctor_id: u64,
        original: impl Into<String>,
        origin: Option<IpAddr>,
        user: Option<String>,
    ) -> Result<Submission, SubmissionError> {
        Self::accept_at(gate, doctor_id, original, origin, user, Utc::now())
    }

    /// Same as [`Submission::accept`] with an explicit timestamp
    pub fn accept_at(
        gate: &LengthGate,
        doctor_id: u64,
        original: impl Into<String>,
        origin: Option<IpAddr>,
        user: Option<String>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Submission, SubmissionError> {
        let original = original.into();
        if let Err(err) = gate.check(&original) {
            tracing::debug!(doctor_id, error = %err, "review rejected");
            return Err(err);
        }

        let text = ReviewText::new(original);
        tracing::info!(
            doctor_id,
            original_len = text.original().len(),
            processed_len = text.processed().len(),
            "review accepted"
        );

        Ok(Submission {
            doctor_id,
            text,
            submitted_at,
            origin,
            user,
        })
    }

    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary {
            text: self.text.processed().to_string(),
            date: self.submitted_at.format(SUMMARY_DATE_FORMAT).to_string(),
        }
    }
}
