//! Session memory for substitutes.
//!
//! The context remembers the substitute chosen for each `(type, value)` pair so
//! repeated values are replaced consistently across `redact` calls, and keeps a
//! counter per type that advances once per distinct new value.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::redaction_match::{log_redaction_action_debug, redact_sensitive};
use crate::strategies::Strategy;

#[derive(Debug, Clone, Default)]
pub struct RedactionContext {
    /// type -> original value -> substitute.
    typed: BTreeMap<String, BTreeMap<String, String>>,
    /// type -> last counter handed out.
    counters: HashMap<String, usize>,
    /// original value -> substitute across all types, most recent insert wins.
    flattened: BTreeMap<String, String>,
}

impl RedactionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The memoized substitute for `(pattern_type, value)`, computing and
    /// storing it through `strategy` on first sight.
    ///
    /// A hit neither advances the counter nor calls the strategy.
    pub fn get_or_create_redaction(&mut self, value: &str, pattern_type: &str, strategy: &dyn Strategy) -> String {
        if let Some(existing) = self.typed.get(pattern_type).and_then(|values| values.get(value)) {
            return existing.clone();
        }

        let counter = self.counters.entry(pattern_type.to_string()).or_insert(0);
        *counter += 1;
        let substitute = strategy.redact(value, pattern_type, *counter);
        log_redaction_action_debug(module_path!(), value, &substitute, pattern_type);

        self.typed
            .entry(pattern_type.to_string())
            .or_default()
            .insert(value.to_string(), substitute.clone());
        if let Some(previous) = self.flattened.insert(value.to_string(), substitute.clone()) {
            debug!(
                "Value {} is memoized under more than one type; flattened mapping now points to '{}' (was '{}').",
                redact_sensitive(value),
                substitute,
                previous
            );
        }
        substitute
    }

    /// Forgets every substitute and restarts all counters.
    pub fn clear(&mut self) {
        self.typed.clear();
        self.counters.clear();
        self.flattened.clear();
    }

    /// Original -> substitute across all types.
    ///
    /// When the same literal was memoized under two types, the entry inserted
    /// most recently wins; [`typed_mapping`](Self::typed_mapping) keeps both.
    pub fn get_mapping(&self) -> BTreeMap<String, String> {
        self.flattened.clone()
    }

    pub fn typed_mapping(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.typed
    }

    /// The last counter handed out for `pattern_type` (0 if none yet).
    pub fn counter(&self, pattern_type: &str) -> usize {
        self.counters.get(pattern_type).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.typed.is_empty()
    }
}
