//! errors.rs - Custom error types for the redactor-core library.
//!
//! Configuration problems are collected and reported together, so a caller
//! fixing a config file sees every mistake at once instead of one per run.
//! Redaction itself is infallible and has no variant here.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types surfaced by the `redactor-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RedactorError {
    /// One or more configuration problems, aggregated.
    #[error("Invalid configuration: {}", .0.join(", "))]
    Configuration(Vec<String>),

    /// The configuration file could not be read.
    #[error("Failed to load config from {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file was read but is not valid JSON/YAML for the config schema.
    #[error("Failed to parse config file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Pattern '{pattern}' uses unsupported regex flag '{flag}'")]
    UnsupportedRegexFlag { pattern: String, flag: char },
}

impl RedactorError {
    /// True for failures reading or parsing an external configuration source.
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::ConfigRead { .. } | Self::ConfigParse { .. })
    }

    /// The individual messages carried by a configuration error, or the
    /// rendered error as a single message for every other variant.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Configuration(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}
