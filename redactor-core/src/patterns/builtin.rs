//! Built-in pattern definitions.
//!
//! Expressions are written for the `regex` crate: `[0-9]` instead of `\d`
//! and `(?-u:\b)` instead of `\b` (both Unicode-aware there), and no
//! lookaround. The assertions the
//! expressions cannot state are attached as [`Boundary`] guards or, for IPv6,
//! as a validator.
//!
//! License: MIT OR APACHE 2.0

use super::compiler::compile_regex;
use super::matcher::{Boundary, GuardedRegex, Matcher};
use super::PatternKind;
use crate::errors::RedactorError;
use crate::validators::is_valid_ipv6_candidate;

pub const IPV4_REGEX: &str = r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(?:/[0-9]{1,2})?";

/// Deliberately permissive; candidates are checked by [`is_valid_ipv6_candidate`].
pub const IPV6_REGEX: &str = r"(?:[0-9a-fA-F]{0,4}:){2,7}[0-9a-fA-F]{0,4}";

pub const MAC_ADDRESS_REGEX: &str =
    r"(?:(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2})|(?:(?:[0-9A-Fa-f]{4}\.){2}[0-9A-Fa-f]{4})";

pub const EMAIL_REGEX: &str = r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}(?-u:\b)";

/// North American numbers, with optional `+1`, parenthesized area codes and
/// vanity letters (`555-GETHELP`, `800-FLY-AWAY`).
pub const PHONE_REGEX: &str = r"(?:\+?1[-.\s]?)?(?:\([0-9]{3}\)\s?[0-9]{3}[-.\s]?[0-9]{4}|\([0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\)|[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}|[0-9]{3}[-.\s]?[A-Za-z]{7}|[0-9]{3}[-.\s]?[A-Za-z]{3}[-.\s]?[A-Za-z]{4})";

pub const SSN_REGEX: &str = r"(?-u:\b)[0-9]{3}-[0-9]{2}-[0-9]{4}(?-u:\b)";

pub const CREDIT_CARD_REGEX: &str = r"(?:[0-9]{4}[-\s]?){3,4}[0-9]{1,4}|[0-9]{13,19}";

/// Trailing card digits introduced by a phrase (`ending in 1234`,
/// `last four digits: 1234`) or a run of masking asterisks.
pub const CREDIT_CARD_LAST4_REGEX: &str = r"(?i)(?:(?:card|payment|account)\s+)?(?:ending\s+in\s+|ends\s+in\s+|last\s+(?:4|four)(?:\s+digits)?[\s:]+)[0-9]{4}|(?:\*{4,})[0-9]{4}";

pub const HOSTNAME_REGEX: &str =
    r"(?-u:\b)(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}(?-u:\b)";

pub const TICKET_NUMBER_REGEX: &str = r"(?i)(?:ticket|case)\s*[#:-]?\s*[0-9]+";

/// The default expression for a built-in kind. `name` and `Custom` have none.
pub fn builtin_regex(kind: PatternKind) -> Option<&'static str> {
    match kind {
        PatternKind::Ipv4 => Some(IPV4_REGEX),
        PatternKind::Ipv6 => Some(IPV6_REGEX),
        PatternKind::MacAddress => Some(MAC_ADDRESS_REGEX),
        PatternKind::Email => Some(EMAIL_REGEX),
        PatternKind::Phone => Some(PHONE_REGEX),
        PatternKind::Ssn => Some(SSN_REGEX),
        PatternKind::CreditCard => Some(CREDIT_CARD_REGEX),
        PatternKind::CreditCardLast4 => Some(CREDIT_CARD_LAST4_REGEX),
        PatternKind::Hostname => Some(HOSTNAME_REGEX),
        PatternKind::TicketNumber => Some(TICKET_NUMBER_REGEX),
        PatternKind::Name | PatternKind::Custom => None,
    }
}

/// Builds the built-in matcher for `kind`, guards and validator included.
///
/// Kinds without a built-in expression get [`Matcher::Unavailable`].
pub fn builtin_matcher(kind: PatternKind) -> Result<Matcher, RedactorError> {
    let Some(source) = builtin_regex(kind) else {
        return Ok(Matcher::Unavailable);
    };
    let name = kind.type_name().unwrap_or("custom");
    let regex = GuardedRegex::plain(compile_regex(name, source, None)?);

    let guarded = match kind {
        PatternKind::Ipv4 | PatternKind::CreditCard => regex
            .not_preceded_by(Boundary::Digit)
            .not_followed_by(Boundary::Digit),
        PatternKind::Phone => regex
            .not_preceded_by(Boundary::Alphanumeric)
            .not_followed_by(Boundary::Alphanumeric),
        PatternKind::CreditCardLast4 => regex.not_followed_by(Boundary::Digit),
        PatternKind::Ipv6 => regex.validated_by(is_valid_ipv6_candidate),
        _ => regex,
    };
    Ok(Matcher::Regex(guarded))
}
