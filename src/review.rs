//! Review text processing
//!
//! - [`transforms`]: the normalization pipeline and its stages
//! - [`segmentation`]: sentence body / terminator tokenizer used by the pipeline
//! - [`text`]: original text paired with its normalized form
//! - [`submission`]: minimum-length gate and the submission record

pub mod segmentation;
pub mod submission;
pub mod text;
pub mod transforms;
