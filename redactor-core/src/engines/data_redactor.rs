// redactor-core/src/engines/data_redactor.rs
//! The pattern-driven `RedactionEngine`.
//!
//! A redaction pass is: scan every enabled pattern, resolve overlaps, fetch a
//! substitute for each surviving match in ascending order (so counters follow
//! first appearance), then splice substitutes into the text from the end
//! backward so earlier offsets stay valid.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::config::RedactorConfig;
use crate::context::RedactionContext;
use crate::engine::RedactionEngine;
use crate::errors::RedactorError;
use crate::overlap::resolve_overlaps;
use crate::patterns::{compile_patterns, NameMatcher, Pattern};
use crate::redaction_match::{Match, MatchSummary, RedactionResult};
use crate::scanner::scan;
use crate::strategies::{RedactionStrategy, StrategySet};

#[derive(Debug)]
pub struct DataRedactor {
    config: RedactorConfig,
    patterns: Vec<Pattern>,
    strategies: StrategySet,
    context: RedactionContext,
    name_matcher: Option<Arc<dyn NameMatcher>>,
}

impl DataRedactor {
    /// Builds an engine from a (possibly partial) configuration merged over
    /// the defaults.
    pub fn new(config: RedactorConfig) -> Result<Self, RedactorError> {
        Self::build(RedactorConfig::load_from_object(config), None)
    }

    pub fn with_default_config() -> Result<Self, RedactorError> {
        Self::build(RedactorConfig::default_config(), None)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RedactorError> {
        Self::build(RedactorConfig::load_from_file(path)?, None)
    }

    /// Supplies the matcher behind the `name` pattern and rebuilds patterns.
    ///
    /// A `name.regex` override in the configuration still takes precedence.
    pub fn with_name_matcher(mut self, matcher: Arc<dyn NameMatcher>) -> Result<Self, RedactorError> {
        self.patterns = compile_patterns(&self.config, Some(&matcher))?;
        self.name_matcher = Some(matcher);
        self.context.clear();
        Ok(self)
    }

    fn build(config: RedactorConfig, name_matcher: Option<Arc<dyn NameMatcher>>) -> Result<Self, RedactorError> {
        config.validate()?;
        let patterns = compile_patterns(&config, name_matcher.as_ref())?;
        let strategies = StrategySet::new(&config.format_options);
        debug!(
            "DataRedactor ready with {} patterns ({} enabled).",
            patterns.len(),
            patterns.iter().filter(|p| p.is_enabled()).count()
        );

        Ok(Self {
            config,
            patterns,
            strategies,
            context: RedactionContext::new(),
            name_matcher,
        })
    }

    /// Patterns in scan order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Enables or disables the named pattern in place. Returns `false` when
    /// no pattern has that name. The session is kept.
    pub fn set_pattern_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.patterns.iter_mut().find(|p| p.name() == name) {
            Some(pattern) => {
                debug!("Pattern '{}' enabled={}.", name, enabled);
                pattern.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Rebinds the named pattern to `strategy` in place. Returns `false` when
    /// no pattern has that name. Values already memoized keep their
    /// substitutes until the session is reset.
    pub fn set_pattern_strategy(&mut self, name: &str, strategy: RedactionStrategy) -> bool {
        match self.patterns.iter_mut().find(|p| p.name() == name) {
            Some(pattern) => {
                debug!("Pattern '{}' strategy={}.", name, strategy);
                pattern.set_strategy(strategy);
                true
            }
            None => false,
        }
    }

    /// The session mapping split by pattern type.
    pub fn typed_mapping(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        self.context.typed_mapping()
    }

    pub fn context(&self) -> &RedactionContext {
        &self.context
    }
}

impl RedactionEngine for DataRedactor {
    fn redact(&mut self, text: &str) -> RedactionResult {
        let matches = self.find_matches(text);
        debug!("Redacting {} matches in {} bytes of input.", matches.len(), text.len());

        let substitutes: Vec<String> = matches
            .iter()
            .map(|m| {
                let strategy = self.strategies.get(m.strategy);
                self.context.get_or_create_redaction(&m.value, &m.pattern_type, strategy)
            })
            .collect();

        let mut redacted_text = text.to_string();
        for (m, substitute) in matches.iter().zip(&substitutes).rev() {
            redacted_text.replace_range(m.start..m.end, substitute);
        }

        RedactionResult {
            redacted_text,
            mapping: self.context.get_mapping(),
            matches,
        }
    }

    fn find_matches(&self, text: &str) -> Vec<Match> {
        resolve_overlaps(scan(&self.patterns, text))
    }

    fn summarize(&self, text: &str) -> Vec<MatchSummary> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for m in self.find_matches(text) {
            grouped.entry(m.pattern_type).or_default().push(m.value);
        }

        grouped
            .into_iter()
            .map(|(pattern_type, values)| MatchSummary {
                pattern_type,
                occurrences: values.len(),
                values,
            })
            .collect()
    }

    fn reset(&mut self) {
        debug!("Resetting redaction session.");
        self.context.clear();
    }

    fn get_config(&self) -> RedactorConfig {
        self.config.clone()
    }

    fn update_config(&mut self, partial: RedactorConfig) -> Result<(), RedactorError> {
        let config = self.config.merged_with(&partial);
        config.validate()?;
        let patterns = compile_patterns(&config, self.name_matcher.as_ref())?;

        self.strategies = StrategySet::new(&config.format_options);
        self.patterns = patterns;
        self.config = config;
        self.context.clear();
        info!("Configuration updated; {} patterns rebuilt.", self.patterns.len());
        Ok(())
    }
}
