//! Span matchers behind a [`Pattern`](super::Pattern).
//!
//! The `regex` crate has no lookaround, so "not preceded by a digit" style
//! assertions are expressed as [`Boundary`] guards checked on each raw match.
//! When the trailing guard rejects a match, the search is retried at the same
//! start on a haystack cut just before the rejected end, which finds the next
//! shorter candidate the expression allows there.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use regex::Regex;

use super::names::NameMatcher;

/// A character class that must not touch a match on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// ASCII `0-9`.
    Digit,
    /// ASCII `A-Za-z0-9`.
    Alphanumeric,
    /// ASCII `A-Za-z0-9_`, the class an ASCII `\b` separates from.
    Word,
}

impl Boundary {
    fn blocks(self, c: char) -> bool {
        match self {
            Boundary::Digit => c.is_ascii_digit(),
            Boundary::Alphanumeric => c.is_ascii_alphanumeric(),
            Boundary::Word => c.is_ascii_alphanumeric() || c == '_',
        }
    }
}

/// Post-filter applied to a guarded candidate; rejected candidates are skipped whole.
pub type Validator = fn(&str) -> bool;

/// A regex plus optional boundary guards and candidate validator.
#[derive(Clone)]
pub struct GuardedRegex {
    regex: Regex,
    before: Option<Boundary>,
    after: Option<Boundary>,
    validator: Option<Validator>,
}

impl GuardedRegex {
    /// A regex used as-is: plain sequential, non-overlapping scanning.
    pub fn plain(regex: Regex) -> Self {
        Self {
            regex,
            before: None,
            after: None,
            validator: None,
        }
    }

    pub fn not_preceded_by(mut self, boundary: Boundary) -> Self {
        self.before = Some(boundary);
        self
    }

    pub fn not_followed_by(mut self, boundary: Boundary) -> Self {
        self.after = Some(boundary);
        self
    }

    pub fn validated_by(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Non-overlapping spans from a single left-to-right scan.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(candidate) = self.regex.find_at(text, pos) else {
                break;
            };
            let start = candidate.start();

            match self.guarded_end(text, start, candidate.end()) {
                Some(end) if end > start => {
                    if self.validator.map_or(true, |is_valid| is_valid(&text[start..end])) {
                        spans.push(start..end);
                    }
                    pos = end;
                }
                // Guard failed at this start (or the match is empty): move on one char.
                _ => pos = next_char_boundary(text, start),
            }
        }

        spans
    }

    pub fn is_match(&self, text: &str) -> bool {
        if self.before.is_none() && self.after.is_none() && self.validator.is_none() {
            return self.regex.is_match(text);
        }
        !self.find_spans(text).is_empty()
    }

    /// End of the longest acceptable match starting at `start`, if any.
    fn guarded_end(&self, text: &str, start: usize, end: usize) -> Option<usize> {
        if let Some(before) = self.before {
            if text[..start].chars().next_back().is_some_and(|c| before.blocks(c)) {
                return None;
            }
        }

        let Some(after) = self.after else {
            return Some(end);
        };

        let mut end = end;
        loop {
            if !text[end..].chars().next().is_some_and(|c| after.blocks(c)) {
                return Some(end);
            }
            let limit = prev_char_boundary(text, end);
            if limit <= start {
                return None;
            }
            match self.regex.find_at(&text[..limit], start) {
                Some(shorter) if shorter.start() == start && shorter.end() > start => {
                    end = shorter.end();
                }
                _ => return None,
            }
        }
    }
}

impl fmt::Debug for GuardedRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedRegex")
            .field("regex", &self.regex.as_str())
            .field("before", &self.before)
            .field("after", &self.after)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

/// What a pattern scans with.
#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(GuardedRegex),
    /// An injected personal-name matcher.
    Names(Arc<dyn NameMatcher>),
    /// No matcher could be provided (e.g. `name` without a name source); never matches.
    Unavailable,
}

impl Matcher {
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            Matcher::Regex(regex) => regex.find_spans(text),
            Matcher::Names(names) => names
                .find_spans(text)
                .into_iter()
                .filter(|span| {
                    span.start < span.end
                        && span.end <= text.len()
                        && text.is_char_boundary(span.start)
                        && text.is_char_boundary(span.end)
                })
                .collect(),
            Matcher::Unavailable => Vec::new(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Regex(regex) => regex.is_match(text),
            Matcher::Names(names) => names.is_match(text),
            Matcher::Unavailable => false,
        }
    }
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    index + text[index..].chars().next().map_or(1, char::len_utf8)
}

fn prev_char_boundary(text: &str, index: usize) -> usize {
    index - text[..index].chars().next_back().map_or(0, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit_guarded(source: &str) -> GuardedRegex {
        GuardedRegex::plain(Regex::new(source).unwrap())
            .not_preceded_by(Boundary::Digit)
            .not_followed_by(Boundary::Digit)
    }

    #[test]
    fn test_plain_regex_scans_sequentially() {
        let regex = GuardedRegex::plain(Regex::new("aa").unwrap());
        assert_eq!(regex.find_spans("aaaaa"), vec![0..2, 2..4]);
    }

    #[test]
    fn test_leading_guard_rejects_embedded_match() {
        let regex = digit_guarded("[0-9]{3}");
        assert!(regex.find_spans("1234").is_empty());
        assert_eq!(regex.find_spans("x123 456y"), vec![1..4, 5..8]);
    }

    #[test]
    fn test_trailing_guard_retries_shorter_match() {
        // Four groups would end right before a digit; three groups end before '-'.
        let regex = digit_guarded(r"(?:[0-9]{4}-?){3,4}[0-9]{1,4}");
        let text = "1234-5678-9012-3456-78901";
        let found = regex.find_spans(text);
        assert_eq!(found, vec![0..19]);
        assert_eq!(&text[found[0].clone()], "1234-5678-9012-3456");
    }

    #[test]
    fn test_trailing_guard_shrinks_optional_suffix() {
        let regex = digit_guarded(r"[0-9]{1,3}(?:/[0-9]{1,2})?");
        // "/24" would touch the trailing '5'; the bare "10" is kept and "245"
        // is found on its own after the slash.
        assert_eq!(regex.find_spans("10/245"), vec![0..2, 3..6]);
    }

    #[test]
    fn test_validator_skips_whole_candidate() {
        let regex = GuardedRegex::plain(Regex::new("[a-z]+").unwrap()).validated_by(|s| s.len() > 3);
        assert_eq!(regex.find_spans("abc defgh ij"), vec![4..9]);
        assert!(regex.is_match("abcd"));
        assert!(!regex.is_match("abc"));
    }

    #[test]
    fn test_empty_matches_are_skipped() {
        let regex = GuardedRegex::plain(Regex::new("x*").unwrap());
        assert_eq!(regex.find_spans("axxb"), vec![1..3]);
        assert_eq!(regex.find_spans("éxx"), vec![2..4]);
    }

    #[test]
    fn test_word_guard_ignores_non_ascii_neighbours() {
        let regex = GuardedRegex::plain(Regex::new("(?i)acme").unwrap())
            .not_preceded_by(Boundary::Word)
            .not_followed_by(Boundary::Word);
        assert_eq!(regex.find_spans("éAcme"), vec![2..6]);
        assert!(regex.find_spans("_acme xacme acme1").is_empty());
    }

    #[derive(Debug)]
    struct FirstByte;

    impl NameMatcher for FirstByte {
        fn find_spans(&self, _text: &str) -> Vec<Range<usize>> {
            vec![0..1, 3..8, 7..40]
        }
    }

    #[test]
    fn test_name_spans_off_char_boundaries_are_dropped() {
        let matcher = Matcher::Names(Arc::new(FirstByte));
        // 0..1 splits 'é'; 7..40 runs past the end.
        assert_eq!(matcher.find_spans("é hello"), vec![3..8]);
    }

    #[test]
    fn test_unavailable_matcher_never_matches() {
        assert!(Matcher::Unavailable.find_spans("anything").is_empty());
        assert!(!Matcher::Unavailable.is_match("anything"));
    }
}
