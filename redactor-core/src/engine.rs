// redactor-core/src/engine.rs
//! Defines the core `RedactionEngine` trait.
//!
//! The trait decouples callers from the concrete engine so that front ends
//! (batch tools, services, UIs) can hold a `Box<dyn RedactionEngine>`.
//!
//! License: MIT OR APACHE 2.0

use crate::config::RedactorConfig;
use crate::errors::RedactorError;
use crate::redaction_match::{Match, MatchSummary, RedactionResult};

/// A stateful redaction engine.
///
/// The engine owns a session: substitutes chosen in one `redact` call are
/// reused by later calls until `reset` or `update_config`.
pub trait RedactionEngine: Send + Sync {
    /// Finds every sensitive span in `text`, replaces each with its memoized
    /// or freshly computed substitute and returns the new text, the session
    /// mapping and the applied matches. Never fails.
    fn redact(&mut self, text: &str) -> RedactionResult;

    /// The matches `redact` would apply, ascending, without touching the
    /// session.
    fn find_matches(&self, text: &str) -> Vec<Match>;

    /// Per-type occurrence counts for a dry run over `text`.
    fn summarize(&self, text: &str) -> Vec<MatchSummary>;

    /// Forgets all substitutes and restarts every counter.
    fn reset(&mut self);

    /// An owned copy of the active configuration.
    fn get_config(&self) -> RedactorConfig;

    /// Merges `partial` into the active configuration, validates it and
    /// rebuilds strategies and patterns. The session is cleared on success;
    /// on error the engine is left unchanged.
    fn update_config(&mut self, partial: RedactorConfig) -> Result<(), RedactorError>;
}
