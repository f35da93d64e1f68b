//! Shared configuration loader for the review-text tools.
//!
//! `defaults/review.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ReviewConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/review.default.toml");

/// Top-level configuration consumed by review-text applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    pub submission: SubmissionConfig,
    pub output: OutputConfig,
}

/// Knobs for the submission gate.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    pub min_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_stages: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

/// File layered over the defaults when no explicit path is given
pub const LOCAL_CONFIG_FILE: &str = "review.toml";

/// Builds a [`ReviewConfig`] from the embedded defaults, an optional user file
/// and command-line overrides, in that order of precedence.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer the user's configuration file.
    ///
    /// An explicit path must exist. Without one, [`LOCAL_CONFIG_FILE`] in the
    /// working directory is used when present.
    pub fn with_user_file(self, explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => self.add_toml(path, true),
            None => self.add_toml(Path::new(LOCAL_CONFIG_FILE), false),
        }
    }

    /// Force the output format (`text` or `json`)
    pub fn with_format(self, format: &str) -> Result<Self, ConfigError> {
        self.set("output.format", format)
    }

    /// Force the minimum review length
    pub fn with_min_length(self, min_length: usize) -> Result<Self, ConfigError> {
        let value = i64::try_from(min_length).map_err(|e| ConfigError::Message(e.to_string()))?;
        self.set("submission.min_length", value)
    }

    pub fn build(self) -> Result<ReviewConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn add_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn set(mut self, key: &str, value: impl Into<ValueKind>) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
