//! Match scanning across every enabled pattern.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::patterns::Pattern;
use crate::redaction_match::{log_captured_match_debug, Match};

/// Runs each enabled pattern over `text` and concatenates the results in
/// pattern order. Matches from different patterns may overlap; that is
/// resolved later by [`resolve_overlaps`](crate::overlap::resolve_overlaps).
pub fn scan(patterns: &[Pattern], text: &str) -> Vec<Match> {
    let mut all_matches = Vec::new();

    for pattern in patterns.iter().filter(|p| p.is_enabled()) {
        let found = pattern.find_all(text);
        if !found.is_empty() {
            debug!("Pattern '{}' found {} matches.", pattern.name(), found.len());
        }
        for m in &found {
            log_captured_match_debug(module_path!(), &m.pattern_type, &m.value, m.start, m.end);
        }
        all_matches.extend(found);
    }

    all_matches
}
