//! Sentence segmentation
//!
//! Splits text into sentence bodies and the terminator runs that close them.
//! A terminator run is a maximal sequence of `.`, `!` and `?` characters, so
//! `"?!"` and `"..."` are single terminators.
//!
//! Segmentation is a two-pass scan: [`terminator_runs`] finds the byte ranges of
//! every run, then [`segment`] slices the bodies that sit between them. Bodies are
//! returned raw (untrimmed); deciding what to do with surrounding whitespace is up
//! to the caller.

use std::ops::Range;

/// A sentence body together with the terminator run that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Text between the previous terminator (or start of input) and this one
    pub body: &'a str,
    /// The terminator run closing this body, `None` for trailing text
    pub terminator: Option<&'a str>,
}

/// Whether `c` ends a sentence
pub fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Whether `c` counts as whitespace around sentence bodies and punctuation
///
/// Unicode `White_Space` plus the ASCII information separators U+001C..=U+001F,
/// which review text pasted from older systems sometimes carries as line breaks.
pub fn is_review_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Byte ranges of all maximal terminator runs, in order
pub fn terminator_runs(text: &str) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (is_terminator(c), current) {
            (true, None) => current = Some(idx),
            (false, Some(start)) => {
                runs.push(start..idx);
                current = None;
            }
            _ => {}
        }
    }

    if let Some(start) = current {
        runs.push(start..text.len());
    }

    runs
}

/// Split `text` into sentences
///
/// Every terminator run produces one [`Sentence`] carrying the body in front of
/// it, which may be empty. Text after the last run becomes a final sentence with
/// no terminator, but only when that slice is non-empty.
pub fn segment(text: &str) -> Vec<Sentence<'_>> {
    let runs = terminator_runs(text);
    let mut sentences = Vec::with_capacity(runs.len() + 1);
    let mut body_start = 0;

    for run in runs {
        sentences.push(Sentence {
            body: &text[body_start..run.start],
            terminator: Some(&text[run.clone()]),
        });
        body_start = run.end;
    }

    if body_start < text.len() {
        sentences.push(Sentence {
            body: &text[body_start..],
            terminator: None,
        });
    }

    sentences
}
