// redactor-core/src/redaction_match.rs
//! Result types for redaction runs, plus PII-safe debug logging helpers.
//!
//! Matched values are the sensitive data itself, so they never reach the log
//! verbatim unless `REDACTOR_ALLOW_DEBUG_PII=true` is set in the environment.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::strategies::RedactionStrategy;

lazy_static! {
    /// Read once: whether sensitive values may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("REDACTOR_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One located occurrence of sensitive data.
///
/// `start` and `end` are byte offsets into the scanned `&str`; `end` is
/// exclusive and both fall on `char` boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub value: String,
    pub start: usize,
    pub end: usize,
    /// Name of the pattern that produced the match.
    #[serde(rename = "type")]
    pub pattern_type: String,
    pub strategy: RedactionStrategy,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the two half-open spans share at least one byte.
    pub fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Output of one `redact` call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionResult {
    pub redacted_text: String,
    /// Original value -> substitute, for everything memoized this session.
    pub mapping: BTreeMap<String, String>,
    /// Applied matches, ascending by `start`.
    pub matches: Vec<Match>,
}

/// Occurrences of one pattern type in a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub pattern_type: String,
    pub occurrences: usize,
    /// Matched values in order of appearance, duplicates included.
    pub values: Vec<String>,
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_captured_match_debug(module_path: &str, pattern_type: &str, original: &str, start: usize, end: usize) {
    debug!(
        "{} Captured match for pattern '{}' at {}..{}: '{}'",
        module_path,
        pattern_type,
        start,
        end,
        get_loggable_content(original)
    );
}

pub fn log_redaction_action_debug(module_path: &str, original: &str, substitute: &str, pattern_type: &str) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}' for pattern '{}'",
        module_path,
        get_loggable_content(original),
        substitute,
        pattern_type
    );
}
