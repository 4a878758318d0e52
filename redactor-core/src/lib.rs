// redactor-core/src/lib.rs
//! # Redactor Core Library
//!
//! `redactor-core` finds sensitive data in free-form text (network
//! identifiers, contact details, financial numbers, personal names and
//! user-defined patterns) and replaces each occurrence with a substitute. The
//! mapping from original to substitute is kept for the lifetime of a session,
//! so the same value is always replaced the same way.
//!
//! ## Modules
//!
//! * `config`: The configuration document, loading (JSON/YAML), merging and validation.
//! * `patterns`: Built-in and custom patterns, their matchers and compilation.
//! * `scanner`: Runs every enabled pattern over the input.
//! * `overlap`: Reduces candidate matches to a non-overlapping set.
//! * `strategies`: Token, mask and format-preserving substitution.
//! * `context`: Session memory of substitutes and per-type counters.
//! * `redaction_match`: Match and result types, plus PII-safe logging helpers.
//! * `engine`: The `RedactionEngine` trait.
//! * `engines`: Concrete engines (`DataRedactor`).
//! * `headless`: One-shot convenience wrapper.
//! * `validators`: Programmatic checks for over-matching patterns (IPv6).
//!
//! ## Usage Example
//!
//! ```rust
//! use redactor_core::{DataRedactor, RedactionEngine};
//!
//! fn main() -> Result<(), redactor_core::RedactorError> {
//!     let mut redactor = DataRedactor::with_default_config()?;
//!
//!     let first = redactor.redact("Contact me at 10.0.0.1");
//!     assert_eq!(first.redacted_text, "Contact me at [IPV4_1]");
//!
//!     // The session remembers the substitute.
//!     let second = redactor.redact("Gateway 10.0.0.1, DNS 8.8.8.8");
//!     assert_eq!(second.redacted_text, "Gateway [IPV4_1], DNS [IPV4_2]");
//!
//!     redactor.reset();
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Configuration problems are reported through [`RedactorError`], with every
//! validation message collected into one error. Redaction itself never fails.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod context;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod overlap;
pub mod patterns;
pub mod redaction_match;
pub mod scanner;
pub mod strategies;
pub mod validators;

/// Re-exports the configuration types.
pub use config::{CustomPattern, FormatOptions, PatternConfig, PatternsConfig, RedactorConfig};

pub use errors::RedactorError;

pub use engine::RedactionEngine;
pub use engines::data_redactor::DataRedactor;

pub use context::RedactionContext;
pub use overlap::resolve_overlaps;
pub use scanner::scan;

/// Re-exports pattern types, including the name-matcher capability.
pub use patterns::{NameListMatcher, NameMatcher, Pattern, PatternKind};

pub use strategies::{RedactionStrategy, Strategy};

pub use redaction_match::{redact_sensitive, Match, MatchSummary, RedactionResult};

pub use headless::headless_redact_string;
