//! Configuration management for `redactor-core`.
//!
//! This module defines the configuration document (per-pattern settings,
//! custom patterns, custom entity lists and global format options), loads it
//! from JSON or YAML, merges partial documents over the embedded defaults and
//! validates the result.
//!
//! Strategy names are kept as plain strings here and parsed during validation,
//! so a bad name shows up as one entry in the aggregated error list instead of
//! aborting deserialization.
//!
//! License: MIT OR Apache-2.0

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use log::{debug, error, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::RedactorError;
use crate::patterns::{compile_regex, PatternKind};
use crate::strategies::RedactionStrategy;

const DEFAULT_CONFIG_YAML: &str = include_str!("../config/default_config.yaml");

static DEFAULT_CONFIG: Lazy<RedactorConfig> = Lazy::new(|| {
    debug!("Parsing embedded default configuration...");
    serde_yml::from_str(DEFAULT_CONFIG_YAML).unwrap_or_else(|e| {
        // Every missing entry falls back to an enabled token pattern, which is
        // what the embedded document says anyway.
        error!("Embedded default configuration is invalid: {}", e);
        RedactorConfig::default()
    })
});

/// Global options handed to every strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Token template; `{TYPE}` and `{INDEX}` are substituted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_char: Option<String>,
    /// Keep punctuation when masking (default `true`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_structure: Option<bool>,
}

impl FormatOptions {
    /// Field-wise merge; fields set in `other` win.
    pub fn merged_with(&self, other: &FormatOptions) -> FormatOptions {
        FormatOptions {
            token_format: other.token_format.clone().or_else(|| self.token_format.clone()),
            mask_char: other.mask_char.clone().or_else(|| self.mask_char.clone()),
            preserve_structure: other.preserve_structure.or(self.preserve_structure),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_strategy() -> String {
    RedactionStrategy::Token.as_str().to_string()
}

/// Settings for one built-in pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Replaces the built-in matcher when set and non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            strategy: default_strategy(),
            regex: None,
            flags: None,
        }
    }
}

/// A user-defined regex pattern. Custom patterns are always enabled.
///
/// `name` and `regex` are optional only so that a missing field is reported
/// by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomPattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Defaults to `token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_last4: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PatternConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Vec<CustomPattern>>,
}

impl PatternsConfig {
    fn slot(&self, kind: PatternKind) -> Option<&Option<PatternConfig>> {
        match kind {
            PatternKind::Ipv4 => Some(&self.ipv4),
            PatternKind::Ipv6 => Some(&self.ipv6),
            PatternKind::MacAddress => Some(&self.mac_address),
            PatternKind::Email => Some(&self.email),
            PatternKind::Phone => Some(&self.phone),
            PatternKind::Ssn => Some(&self.ssn),
            PatternKind::CreditCard => Some(&self.credit_card),
            PatternKind::CreditCardLast4 => Some(&self.credit_card_last4),
            PatternKind::Hostname => Some(&self.hostname),
            PatternKind::TicketNumber => Some(&self.ticket_number),
            PatternKind::Name => Some(&self.name),
            PatternKind::Custom => None,
        }
    }

    fn slot_mut(&mut self, kind: PatternKind) -> Option<&mut Option<PatternConfig>> {
        match kind {
            PatternKind::Ipv4 => Some(&mut self.ipv4),
            PatternKind::Ipv6 => Some(&mut self.ipv6),
            PatternKind::MacAddress => Some(&mut self.mac_address),
            PatternKind::Email => Some(&mut self.email),
            PatternKind::Phone => Some(&mut self.phone),
            PatternKind::Ssn => Some(&mut self.ssn),
            PatternKind::CreditCard => Some(&mut self.credit_card),
            PatternKind::CreditCardLast4 => Some(&mut self.credit_card_last4),
            PatternKind::Hostname => Some(&mut self.hostname),
            PatternKind::TicketNumber => Some(&mut self.ticket_number),
            PatternKind::Name => Some(&mut self.name),
            PatternKind::Custom => None,
        }
    }

    /// The entry for a built-in kind, if configured.
    pub fn get(&self, kind: PatternKind) -> Option<&PatternConfig> {
        self.slot(kind).and_then(Option::as_ref)
    }

    /// Replaces the entry for a built-in kind. Ignored for `Custom`.
    pub fn set(&mut self, kind: PatternKind, entry: PatternConfig) {
        if let Some(slot) = self.slot_mut(kind) {
            *slot = Some(entry);
        }
    }
}

/// Represents the top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RedactorConfig {
    pub format_options: FormatOptions,
    pub patterns: PatternsConfig,
    /// Category name -> literal values. Each non-empty category becomes a
    /// case-insensitive whole-word pattern using the token strategy.
    pub custom_entities: BTreeMap<String, Vec<String>>,
    /// Sample text carried along for interactive front ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_data: Option<String>,
}

impl RedactorConfig {
    /// An owned copy of the embedded defaults.
    pub fn default_config() -> Self {
        DEFAULT_CONFIG.clone()
    }

    /// Merges a partial configuration over the defaults. Does not validate.
    pub fn load_from_object(partial: RedactorConfig) -> Self {
        Self::default_config().merged_with(&partial)
    }

    /// Loads a configuration file and merges it over the defaults.
    ///
    /// Files ending in `.json` are parsed as JSON; anything else as YAML
    /// (which also accepts most JSON). The merged result is validated.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RedactorError> {
        let path = path.as_ref();
        info!("Loading redactor config from: {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| RedactorError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed: Result<RedactorConfig, String> = if is_json {
            serde_json::from_str(&text).map_err(|e| e.to_string())
        } else {
            serde_yml::from_str(&text).map_err(|e| e.to_string())
        };
        let partial = parsed.map_err(|message| RedactorError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;

        let config = Self::load_from_object(partial);
        config.validate()?;
        info!(
            "Loaded config from {} ({} custom patterns, {} entity categories).",
            path.display(),
            config.patterns.custom.as_ref().map_or(0, Vec::len),
            config.custom_entities.len()
        );
        Ok(config)
    }

    /// Returns `self` with `other` merged on top.
    ///
    /// Built-in entries present in `other` replace ours wholesale; a `custom`
    /// list in `other` replaces ours; entity categories merge per key (a
    /// category in `other` replaces the same category here); format options
    /// merge per field. `test_data` is taken from `other` when set.
    pub fn merged_with(&self, other: &RedactorConfig) -> RedactorConfig {
        let mut merged = self.clone();
        merged.format_options = self.format_options.merged_with(&other.format_options);

        for kind in PatternKind::BUILTIN {
            if let Some(entry) = other.patterns.get(kind) {
                merged.patterns.set(kind, entry.clone());
            }
        }
        if let Some(custom) = &other.patterns.custom {
            merged.patterns.custom = Some(custom.clone());
        }

        for (category, values) in &other.custom_entities {
            merged.custom_entities.insert(category.clone(), values.clone());
        }
        if other.test_data.is_some() {
            merged.test_data = other.test_data.clone();
        }

        debug!(
            "Merged config: {} custom patterns, {} entity categories.",
            merged.patterns.custom.as_ref().map_or(0, Vec::len),
            merged.custom_entities.len()
        );
        merged
    }

    /// Every problem with this configuration, in a stable order: format
    /// options, built-in entries, custom patterns, then duplicate names.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut names: Vec<String> = Vec::new();

        // An empty mask falls back to the default; anything else is one char.
        if let Some(mask) = self.format_options.mask_char.as_deref() {
            if !mask.is_empty() && mask.chars().count() != 1 {
                errors.push("formatOptions.maskChar must be a single character".to_string());
            }
        }

        for kind in PatternKind::BUILTIN {
            let Some(name) = kind.type_name() else { continue };
            names.push(name.to_string());
            let Some(entry) = self.patterns.get(kind) else { continue };

            if entry.strategy.parse::<RedactionStrategy>().is_err() {
                errors.push(format!("Pattern '{}' has invalid strategy: {}", name, entry.strategy));
            }
            if let Some(source) = entry.regex.as_deref().filter(|r| !r.is_empty()) {
                if let Err(e) = compile_regex(name, source, entry.flags.as_deref()) {
                    errors.push(format!("Pattern '{}' has invalid regex: {}", name, e));
                }
            }
        }

        for (index, custom) in self.patterns.custom.iter().flatten().enumerate() {
            let name = custom.name.as_deref().filter(|n| !n.is_empty());
            let label = match name {
                Some(name) => format!("'{}'", name),
                None => {
                    errors.push(format!("Custom pattern at index {} is missing 'name'", index));
                    format!("at index {}", index)
                }
            };

            let strategy = custom.strategy.as_deref().unwrap_or("token");
            if strategy.parse::<RedactionStrategy>().is_err() {
                errors.push(format!("Custom pattern {} has invalid strategy: {}", label, strategy));
            }

            match custom.regex.as_deref().filter(|r| !r.is_empty()) {
                Some(source) => {
                    if let Err(e) = compile_regex(name.unwrap_or("custom"), source, custom.flags.as_deref()) {
                        errors.push(format!("Custom pattern {} has invalid regex: {}", label, e));
                    }
                }
                None => errors.push(format!("Custom pattern {} is missing 'regex'", label)),
            }

            if let Some(name) = name {
                names.push(name.to_string());
            }
        }

        names.extend(
            self.custom_entities
                .iter()
                .filter(|(_, values)| values.iter().any(|v| !v.trim().is_empty()))
                .map(|(category, _)| category.clone()),
        );

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
                errors.push(format!("Duplicate pattern name: '{}'", name));
            }
        }

        errors
    }

    pub fn validate(&self) -> Result<(), RedactorError> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(RedactorError::Configuration(errors))
        }
    }
}
