//! Personal-name matching.
//!
//! Recognizing names needs a large curated list, which this crate does not
//! ship. The `name` pattern instead consumes any [`NameMatcher`] handed to the
//! engine. [`NameListMatcher`] is a ready-made implementation over an
//! in-memory list.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;
use std::fmt;
use std::ops::Range;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::RedactorError;

/// Name lists can hold tens of thousands of entries; the alternation needs
/// more room than ordinary patterns.
const NAME_REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Finds personal names in text.
pub trait NameMatcher: fmt::Debug + Send + Sync {
    /// Non-overlapping byte spans of names, ascending.
    fn find_spans(&self, text: &str) -> Vec<Range<usize>>;

    fn is_match(&self, text: &str) -> bool {
        !self.find_spans(text).is_empty()
    }
}

/// Case-insensitive matcher over a fixed list of names.
///
/// A known name may be followed by whitespace and a second known name, so
/// `John Doe` is one span rather than two.
#[derive(Debug, Clone)]
pub struct NameListMatcher {
    regex: Option<Regex>,
}

impl NameListMatcher {
    pub fn new<I, S>(names: I) -> Result<Self, RedactorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternation = literal_alternation(names);
        if alternation.is_empty() {
            debug!("Name list is empty; name matcher will never match.");
            return Ok(Self { regex: None });
        }

        let source = format!(r"(?i)\b(?:{0})(?:\s+(?:{0}))?\b", alternation);
        let regex = RegexBuilder::new(&source)
            .size_limit(NAME_REGEX_SIZE_LIMIT)
            .build()
            .map_err(|e| RedactorError::PatternCompilation("name".to_string(), e))?;
        Ok(Self { regex: Some(regex) })
    }
}

impl NameMatcher for NameListMatcher {
    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        match &self.regex {
            Some(regex) => regex.find_iter(text).map(|m| m.range()).collect(),
            None => Vec::new(),
        }
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(text))
    }
}

/// Escapes, deduplicates and orders literals longest-first, joined with `|`.
///
/// Longest-first keeps `Acme Corp` from losing to `Acme` under leftmost-first
/// alternation. Blank entries are dropped. Returns an empty string when
/// nothing remains.
pub(crate) fn literal_alternation<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut literals: Vec<String> = values
        .into_iter()
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty() && seen.insert(v.clone()))
        .collect();

    literals.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
    literals
        .iter()
        .map(|v| regex::escape(v))
        .collect::<Vec<_>>()
        .join("|")
}
