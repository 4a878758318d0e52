// File: redactor-core/src/validators.rs
//! Programmatic validation for candidates a permissive regex over-matches.
//!
//! The IPv6 scanning expression accepts any run of hex groups and colons,
//! which includes MAC addresses and clock times. These helpers keep only
//! candidates that are structurally valid IPv6 addresses.
//!
//! License: MIT OR APACHE 2.0

const IPV6_GROUPS: usize = 8;

/// Expands a single `::` shorthand into zero groups so the address has
/// eight hextets. Returns `None` when the expansion is impossible (more than
/// one `::`, or already too many groups).
///
/// An address without `::` is returned split as-is.
pub fn expand_ipv6(addr: &str) -> Option<Vec<String>> {
    let Some((left, right)) = addr.split_once("::") else {
        return Some(addr.split(':').map(str::to_string).collect());
    };
    if right.contains("::") {
        return None;
    }

    let left: Vec<&str> = if left.is_empty() { Vec::new() } else { left.split(':').collect() };
    let right: Vec<&str> = if right.is_empty() { Vec::new() } else { right.split(':').collect() };

    let existing = left.len() + right.len();
    if existing > IPV6_GROUPS {
        return None;
    }

    let mut groups: Vec<String> = Vec::with_capacity(IPV6_GROUPS);
    groups.extend(left.into_iter().map(str::to_string));
    groups.extend(std::iter::repeat("0".to_string()).take(IPV6_GROUPS - existing));
    groups.extend(right.into_iter().map(str::to_string));
    Some(groups)
}

fn is_hextet(group: &str) -> bool {
    (1..=4).contains(&group.len()) && group.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validates an IPv6 candidate.
///
/// Requires at least two colons and at most one `::`, and the expanded form
/// must be exactly eight groups of one to four hex digits.
pub fn is_valid_ipv6_candidate(addr: &str) -> bool {
    if addr.matches(':').count() < 2 {
        return false;
    }
    if addr.matches("::").count() > 1 {
        return false;
    }

    match expand_ipv6(addr) {
        Some(groups) => groups.len() == IPV6_GROUPS && groups.iter().all(|g| is_hextet(g)),
        None => false,
    }
}
