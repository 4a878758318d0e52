//! Substitution strategies.
//!
//! A strategy turns an original value into its substitute. Every strategy is a
//! pure function of `(value, pattern type, counter)` plus the format options it
//! was built with, which is what lets the [`RedactionContext`](crate::context::RedactionContext)
//! memoize results safely.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::FormatOptions;

pub mod format_preserving;
pub mod mask;
pub mod token;

pub use format_preserving::FormatPreservingStrategy;
pub use mask::MaskStrategy;
pub use token::TokenStrategy;

/// The substitution policy bound to a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RedactionStrategy {
    Token,
    Mask,
    FormatPreserving,
}

impl RedactionStrategy {
    pub const ALL: [RedactionStrategy; 3] = [
        RedactionStrategy::Token,
        RedactionStrategy::Mask,
        RedactionStrategy::FormatPreserving,
    ];

    /// The configuration spelling of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            RedactionStrategy::Token => "token",
            RedactionStrategy::Mask => "mask",
            RedactionStrategy::FormatPreserving => "formatPreserving",
        }
    }
}

impl fmt::Display for RedactionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedactionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RedactionStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| format!("unknown strategy '{}'", s))
    }
}

/// Converts an original value into a substitute.
pub trait Strategy: fmt::Debug + Send + Sync {
    fn redact(&self, value: &str, pattern_type: &str, counter: usize) -> String;
}

/// One instance of every strategy, built from a single set of format options.
///
/// Rebuilt wholesale whenever the format options change.
#[derive(Debug, Clone)]
pub struct StrategySet {
    token: TokenStrategy,
    mask: MaskStrategy,
    format_preserving: FormatPreservingStrategy,
}

impl StrategySet {
    pub fn new(options: &FormatOptions) -> Self {
        Self {
            token: TokenStrategy::new(options),
            mask: MaskStrategy::new(options),
            format_preserving: FormatPreservingStrategy::new(options),
        }
    }

    pub fn get(&self, strategy: RedactionStrategy) -> &dyn Strategy {
        match strategy {
            RedactionStrategy::Token => &self.token,
            RedactionStrategy::Mask => &self.mask,
            RedactionStrategy::FormatPreserving => &self.format_preserving,
        }
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self::new(&FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_parse() {
        assert_eq!("token".parse::<RedactionStrategy>(), Ok(RedactionStrategy::Token));
        assert_eq!("mask".parse::<RedactionStrategy>(), Ok(RedactionStrategy::Mask));
        assert_eq!(
            "formatPreserving".parse::<RedactionStrategy>(),
            Ok(RedactionStrategy::FormatPreserving)
        );
        assert!("format_preserving".parse::<RedactionStrategy>().is_err());
        assert!("Token".parse::<RedactionStrategy>().is_err());
    }

    #[test]
    fn test_strategy_serde_spelling() {
        let json = serde_json::to_string(&RedactionStrategy::FormatPreserving).unwrap();
        assert_eq!(json, "\"formatPreserving\"");
    }

    #[test]
    fn test_strategy_set_dispatch() {
        let set = StrategySet::default();
        assert_eq!(set.get(RedactionStrategy::Token).redact("x", "email", 2), "[EMAIL_2]");
        assert_eq!(set.get(RedactionStrategy::Mask).redact("ab-1", "email", 1), "**-*");
        assert_eq!(
            set.get(RedactionStrategy::FormatPreserving).redact("x", "ticketNumber", 7),
            "REDACTED_7"
        );
    }
}
