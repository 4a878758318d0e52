//! Token strategy: replaces a value with a templated, numbered placeholder.

use super::Strategy;
use crate::config::FormatOptions;

pub const DEFAULT_TOKEN_FORMAT: &str = "[{TYPE}_{INDEX}]";

#[derive(Debug, Clone)]
pub struct TokenStrategy {
    token_format: String,
}

impl TokenStrategy {
    pub fn new(options: &FormatOptions) -> Self {
        let token_format = options
            .token_format
            .clone()
            .filter(|format| !format.is_empty())
            .unwrap_or_else(|| DEFAULT_TOKEN_FORMAT.to_string());
        Self { token_format }
    }
}

impl Strategy for TokenStrategy {
    fn redact(&self, _value: &str, pattern_type: &str, counter: usize) -> String {
        self.token_format
            .replace("{TYPE}", &to_upper_snake_case(pattern_type))
            .replace("{INDEX}", &counter.to_string())
    }
}

/// `creditCardLast4` -> `CREDIT_CARD_LAST4`, `ipv4` -> `IPV4`.
///
/// An underscore goes in front of an uppercase letter that follows a
/// lowercase letter or a digit; everything else is uppercased in place.
pub fn to_upper_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(format: Option<&str>) -> TokenStrategy {
        TokenStrategy::new(&FormatOptions {
            token_format: format.map(str::to_string),
            ..FormatOptions::default()
        })
    }

    #[test]
    fn test_upper_snake_case() {
        assert_eq!(to_upper_snake_case("ipv4"), "IPV4");
        assert_eq!(to_upper_snake_case("macAddress"), "MAC_ADDRESS");
        assert_eq!(to_upper_snake_case("creditCardLast4"), "CREDIT_CARD_LAST4");
        assert_eq!(to_upper_snake_case("companyNames"), "COMPANY_NAMES");
        assert_eq!(to_upper_snake_case("api_key"), "API_KEY");
        assert_eq!(to_upper_snake_case("IPv6Address"), "IPV6_ADDRESS");
    }

    #[test]
    fn test_default_template() {
        assert_eq!(strategy(None).redact("10.0.0.1", "ipv4", 1), "[IPV4_1]");
        assert_eq!(strategy(Some("")).redact("10.0.0.1", "ipv4", 3), "[IPV4_3]");
    }

    #[test]
    fn test_custom_templates() {
        assert_eq!(strategy(Some("{{{TYPE}-{INDEX}}}")).redact("a", "email", 12), "{{EMAIL-12}}");
        assert_eq!(strategy(Some("<{TYPE}>")).redact("a", "ssn", 4), "<SSN>");
        assert_eq!(strategy(Some("{INDEX}/{INDEX}")).redact("a", "ssn", 4), "4/4");
        assert_eq!(strategy(Some("REMOVED")).redact("a", "ssn", 4), "REMOVED");
    }
}
