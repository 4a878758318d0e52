//! Overlap resolution.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::redaction_match::Match;

/// Reduces candidates to a non-overlapping set, ascending by `start`.
///
/// Candidates are stably sorted by start offset, so among equal starts the one
/// discovered first (earlier pattern, earlier in its scan) wins. A candidate is
/// accepted only if it does not intersect anything already accepted; since
/// accepted spans are ascending, comparing against the last accepted end is
/// enough. Length plays no part.
pub fn resolve_overlaps(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by_key(|m| m.start);

    let mut accepted: Vec<Match> = Vec::with_capacity(matches.len());
    let mut dropped = 0usize;
    for candidate in matches {
        if candidate.is_empty() {
            dropped += 1;
            continue;
        }
        match accepted.last() {
            Some(last) if candidate.start < last.end => dropped += 1,
            _ => accepted.push(candidate),
        }
    }

    if dropped > 0 {
        debug!("Dropped {} overlapping matches; {} remain.", dropped, accepted.len());
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::RedactionStrategy;

    fn m(pattern_type: &str, start: usize, end: usize) -> Match {
        Match {
            value: "v".repeat(end - start),
            start,
            end,
            pattern_type: pattern_type.to_string(),
            strategy: RedactionStrategy::Token,
        }
    }

    fn spans(matches: &[Match]) -> Vec<(&str, usize, usize)> {
        matches.iter().map(|m| (m.pattern_type.as_str(), m.start, m.end)).collect()
    }

    #[test]
    fn test_lower_start_wins_regardless_of_length() {
        let resolved = resolve_overlaps(vec![m("long", 3, 20), m("short", 0, 5)]);
        assert_eq!(spans(&resolved), vec![("short", 0, 5)]);
    }

    #[test]
    fn test_equal_start_keeps_discovery_order() {
        let resolved = resolve_overlaps(vec![m("email", 5, 25), m("hostname", 5, 30), m("x", 30, 31)]);
        assert_eq!(spans(&resolved), vec![("email", 5, 25), ("x", 30, 31)]);
    }

    #[test]
    fn test_adjacent_spans_both_survive() {
        let resolved = resolve_overlaps(vec![m("b", 4, 8), m("a", 0, 4)]);
        assert_eq!(spans(&resolved), vec![("a", 0, 4), ("b", 4, 8)]);
    }

    #[test]
    fn test_contained_span_is_dropped() {
        let resolved = resolve_overlaps(vec![m("outer", 0, 10), m("inner", 2, 4), m("after", 10, 12)]);
        assert_eq!(spans(&resolved), vec![("outer", 0, 10), ("after", 10, 12)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_overlaps(Vec::new()).is_empty());
    }
}
