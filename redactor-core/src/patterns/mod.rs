//! Pattern registry.
//!
//! A [`Pattern`] is a named, independently toggleable matcher for one category
//! of sensitive data. Built-in categories are a closed set ([`PatternKind`]);
//! user-defined regex patterns and custom entity lists share the
//! [`PatternKind::Custom`] variant and are told apart only by name.
//!
//! License: MIT OR APACHE 2.0

use crate::redaction_match::Match;
use crate::strategies::RedactionStrategy;

pub mod builtin;
pub mod compiler;
pub mod matcher;
pub mod names;

pub use compiler::{compile_patterns, compile_regex};
pub use matcher::{Boundary, GuardedRegex, Matcher};
pub use names::{NameListMatcher, NameMatcher};

/// The category a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Ipv4,
    Ipv6,
    MacAddress,
    Hostname,
    Email,
    Phone,
    Ssn,
    CreditCard,
    CreditCardLast4,
    TicketNumber,
    Name,
    /// Runtime-defined patterns: custom regexes and custom entity lists.
    Custom,
}

impl PatternKind {
    /// Built-in kinds in scan order. Ties between equal start offsets are
    /// broken by this order during overlap resolution.
    pub const BUILTIN: [PatternKind; 11] = [
        PatternKind::Ipv4,
        PatternKind::Ipv6,
        PatternKind::MacAddress,
        PatternKind::Email,
        PatternKind::Phone,
        PatternKind::Ssn,
        PatternKind::CreditCard,
        PatternKind::CreditCardLast4,
        PatternKind::Hostname,
        PatternKind::TicketNumber,
        PatternKind::Name,
    ];

    /// The type name a built-in kind reports in matches and tokens.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            PatternKind::Ipv4 => Some("ipv4"),
            PatternKind::Ipv6 => Some("ipv6"),
            PatternKind::MacAddress => Some("macAddress"),
            PatternKind::Hostname => Some("hostname"),
            PatternKind::Email => Some("email"),
            PatternKind::Phone => Some("phone"),
            PatternKind::Ssn => Some("ssn"),
            PatternKind::CreditCard => Some("creditCard"),
            PatternKind::CreditCardLast4 => Some("creditCardLast4"),
            PatternKind::TicketNumber => Some("ticketNumber"),
            PatternKind::Name => Some("name"),
            PatternKind::Custom => None,
        }
    }

    /// Maps a type name back to its kind. Unknown names are `Custom`.
    pub fn from_type_name(name: &str) -> PatternKind {
        PatternKind::BUILTIN
            .into_iter()
            .find(|kind| kind.type_name() == Some(name))
            .unwrap_or(PatternKind::Custom)
    }
}

/// A named matcher with its bound strategy and enabled flag.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: String,
    kind: PatternKind,
    matcher: Matcher,
    strategy: RedactionStrategy,
    enabled: bool,
}

impl Pattern {
    pub fn new(
        name: impl Into<String>,
        kind: PatternKind,
        matcher: Matcher,
        strategy: RedactionStrategy,
        enabled: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            matcher,
            strategy,
            enabled,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn strategy(&self) -> RedactionStrategy {
        self.strategy
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_strategy(&mut self, strategy: RedactionStrategy) {
        self.strategy = strategy;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the matcher finds anything in `text`, regardless of the enabled flag.
    pub fn test(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// All occurrences from one left-to-right scan of this pattern alone.
    ///
    /// A disabled pattern returns nothing without scanning.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        if !self.enabled {
            return Vec::new();
        }

        self.matcher
            .find_spans(text)
            .into_iter()
            .map(|span| Match {
                value: text[span.clone()].to_string(),
                start: span.start,
                end: span.end,
                pattern_type: self.name.clone(),
                strategy: self.strategy,
            })
            .collect()
    }
}
