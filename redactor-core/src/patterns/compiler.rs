//! compiler.rs - Turns a `RedactorConfig` into the engine's pattern list.
//!
//! Patterns are always rebuilt from scratch: built-ins first (in
//! [`PatternKind::BUILTIN`] order), then user regex patterns in configured
//! order, then one synthesized pattern per custom entity category. That order
//! is the scan order, and through the stable overlap sort it is also the
//! tie-break between matches starting at the same offset.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use super::builtin::builtin_matcher;
use super::matcher::{Boundary, GuardedRegex, Matcher};
use super::names::{literal_alternation, NameMatcher};
use super::{Pattern, PatternKind};
use crate::config::{PatternConfig, RedactorConfig};
use crate::errors::RedactorError;
use crate::strategies::RedactionStrategy;

/// Upper bound on the compiled size of any single configured expression.
pub const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiles `source` with single-letter flags (`i`, `m`, `s`; `g`, `y`, `u`
/// and `d` are accepted and have no effect).
pub fn compile_regex(name: &str, source: &str, flags: Option<&str>) -> Result<Regex, RedactorError> {
    let mut builder = RegexBuilder::new(source);
    builder.size_limit(REGEX_SIZE_LIMIT);

    for flag in flags.unwrap_or_default().chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            // Global/sticky/unicode/indices only change how a scan is driven elsewhere.
            'g' | 'y' | 'u' | 'd' => {}
            other => {
                return Err(RedactorError::UnsupportedRegexFlag {
                    pattern: name.to_string(),
                    flag: other,
                })
            }
        }
    }

    builder
        .build()
        .map_err(|e| RedactorError::PatternCompilation(name.to_string(), e))
}

/// Builds every pattern the configuration describes.
///
/// Problems are collected rather than returned one at a time; the result is
/// either the full pattern list or a single [`RedactorError::Configuration`]
/// naming every failure.
pub fn compile_patterns(
    config: &RedactorConfig,
    name_matcher: Option<&Arc<dyn NameMatcher>>,
) -> Result<Vec<Pattern>, RedactorError> {
    let mut patterns = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for kind in PatternKind::BUILTIN {
        let Some(name) = kind.type_name() else { continue };
        let default_entry = PatternConfig::default();
        let entry = config.patterns.get(kind).unwrap_or(&default_entry);

        let strategy = match parse_strategy(name, &entry.strategy) {
            Ok(strategy) => strategy,
            Err(message) => {
                errors.push(message);
                continue;
            }
        };

        let matcher = match entry.regex.as_deref().filter(|r| !r.is_empty()) {
            Some(source) => {
                debug!("Using configured regex override for built-in pattern '{}'.", name);
                compile_regex(name, source, entry.flags.as_deref())
                    .map(|regex| Matcher::Regex(GuardedRegex::plain(regex)))
            }
            None if kind == PatternKind::Name => Ok(match name_matcher {
                Some(names) => Matcher::Names(Arc::clone(names)),
                None => {
                    debug!("No name matcher supplied; pattern 'name' will not match.");
                    Matcher::Unavailable
                }
            }),
            None => builtin_matcher(kind),
        };

        match matcher {
            Ok(matcher) => patterns.push(Pattern::new(name, kind, matcher, strategy, entry.enabled)),
            Err(e) => errors.push(e.to_string()),
        }
    }

    for (index, custom) in config.patterns.custom.iter().flatten().enumerate() {
        let Some(name) = custom.name.as_deref().filter(|n| !n.is_empty()) else {
            errors.push(format!("Custom pattern at index {} is missing 'name'", index));
            continue;
        };
        let Some(source) = custom.regex.as_deref().filter(|r| !r.is_empty()) else {
            errors.push(format!("Custom pattern '{}' is missing 'regex'", name));
            continue;
        };

        let strategy = match parse_strategy(name, custom.strategy.as_deref().unwrap_or("token")) {
            Ok(strategy) => strategy,
            Err(message) => {
                errors.push(message);
                continue;
            }
        };

        match compile_regex(name, source, custom.flags.as_deref()) {
            Ok(regex) => {
                debug!("Custom pattern '{}' compiled successfully.", name);
                patterns.push(Pattern::new(
                    name,
                    PatternKind::Custom,
                    Matcher::Regex(GuardedRegex::plain(regex)),
                    strategy,
                    true,
                ));
            }
            Err(e) => errors.push(e.to_string()),
        }
    }

    for (category, values) in &config.custom_entities {
        let alternation = literal_alternation(values);
        if alternation.is_empty() {
            warn!("Custom entity category '{}' has no values; skipping.", category);
            continue;
        }

        // Whole words only, where a word is a run of ASCII `[A-Za-z0-9_]`.
        let source = format!("(?i)(?:{})", alternation);
        match compile_regex(category, &source, None) {
            Ok(regex) => patterns.push(Pattern::new(
                category.as_str(),
                PatternKind::Custom,
                Matcher::Regex(
                    GuardedRegex::plain(regex)
                        .not_preceded_by(Boundary::Word)
                        .not_followed_by(Boundary::Word),
                ),
                RedactionStrategy::Token,
                true,
            )),
            Err(e) => errors.push(e.to_string()),
        }
    }

    if !errors.is_empty() {
        return Err(RedactorError::Configuration(errors));
    }

    debug!(
        "Finished compiling patterns. Total: {} ({} enabled).",
        patterns.len(),
        patterns.iter().filter(|p| p.is_enabled()).count()
    );
    Ok(patterns)
}

fn parse_strategy(pattern: &str, strategy: &str) -> Result<RedactionStrategy, String> {
    strategy
        .parse()
        .map_err(|_| format!("Pattern '{}' has invalid strategy: {}", pattern, strategy))
}
