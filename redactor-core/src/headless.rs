// File: redactor-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot redaction of a string without keeping an
//! engine (and its session) around.

use anyhow::{Context, Result};

use crate::config::RedactorConfig;
use crate::engine::RedactionEngine;
use crate::engines::data_redactor::DataRedactor;
use crate::redaction_match::RedactionResult;

/// Redacts `content` with a throwaway engine built from `config` (merged over
/// the defaults). Counters start at 1 on every call.
pub fn headless_redact_string(config: RedactorConfig, content: &str) -> Result<RedactionResult> {
    let mut engine: Box<dyn RedactionEngine> =
        Box::new(DataRedactor::new(config).context("Failed to build redaction engine")?);
    Ok(engine.redact(content))
}
