//! Format-preserving strategy: synthesizes a plausible value of the same kind.
//!
//! Output is deterministic per `(value, counter)`. The seed is a 32-bit
//! rolling hash (`h * 31 + unit`, wrapping) over the UTF-16 code units of the
//! value followed by the decimal counter, and every draw is
//! `fract(sin(seed + offset) * 10000)`. Both must stay bit-for-bit stable:
//! substitutes recorded in earlier sessions are reproduced from them.

use super::Strategy;
use crate::config::FormatOptions;
use crate::patterns::PatternKind;

const EMAIL_DOMAINS: [&str; 4] = ["example.com", "test.com", "sample.org", "demo.net"];
const HOSTNAME_TLDS: [&str; 4] = ["com", "net", "org", "io"];
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Offset used for the second, independent draw (domain / TLD choice).
const SECONDARY_DRAW_OFFSET: u32 = 1000;

type Generator = fn(u32, &str) -> String;

/// Generator table keyed by pattern kind. Kinds without an entry fall back
/// to `REDACTED_{counter}`.
fn generator_for(kind: PatternKind) -> Option<Generator> {
    match kind {
        PatternKind::Ipv4 => Some(generate_ipv4),
        PatternKind::MacAddress => Some(generate_mac),
        PatternKind::Email => Some(generate_email),
        PatternKind::Phone => Some(generate_phone),
        PatternKind::Ssn => Some(generate_ssn),
        PatternKind::CreditCard => Some(generate_credit_card),
        PatternKind::Hostname => Some(generate_hostname),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormatPreservingStrategy;

impl FormatPreservingStrategy {
    /// Format options are accepted for symmetry with the other strategies;
    /// none of them influence generated values.
    pub fn new(_options: &FormatOptions) -> Self {
        Self
    }
}

impl Strategy for FormatPreservingStrategy {
    fn redact(&self, value: &str, pattern_type: &str, counter: usize) -> String {
        let seed = hash_string(&format!("{}{}", value, counter));
        match generator_for(PatternKind::from_type_name(pattern_type)) {
            Some(generate) => generate(seed, value),
            None => format!("REDACTED_{}", counter),
        }
    }
}

/// 32-bit rolling multiply-add hash over UTF-16 code units, absolute value.
pub fn hash_string(s: &str) -> u32 {
    let hash = s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// `fract(sin(seed) * 10000)`, in `[0, 1)`.
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

/// An index in `0..n` from the draw at `seed + offset`.
fn pick(seed: u32, offset: u32, n: usize) -> usize {
    let draw = seeded_random(f64::from(seed) + f64::from(offset));
    // fract() of a tiny negative product can round up to exactly 1.0.
    ((draw * n as f64).floor() as usize).min(n - 1)
}

fn random_lowercase(seed: u32, length: usize) -> String {
    (0..length as u32)
        .map(|i| char::from(LOWERCASE[pick(seed, i, LOWERCASE.len())]))
        .collect()
}

fn generate_ipv4(seed: u32, _original: &str) -> String {
    format!(
        "10.{}.{}.{}",
        pick(seed, 0, 256),
        pick(seed, 1, 256),
        pick(seed, 2, 256)
    )
}

fn generate_mac(seed: u32, original: &str) -> String {
    let separator = if original.contains('-') {
        '-'
    } else if original.contains('.') {
        '.'
    } else {
        ':'
    };

    // Cisco-style dotted form uses three groups of four digits.
    let (groups, group_len) = if separator == '.' { (3, 4) } else { (6, 2) };
    let mut parts = Vec::with_capacity(groups);
    for i in 0..groups as u32 {
        let part: String = (0..group_len as u32)
            .map(|j| char::from(HEX_DIGITS[pick(seed, i * group_len as u32 + j, HEX_DIGITS.len())]))
            .collect();
        parts.push(part);
    }
    parts.join(&separator.to_string())
}

fn generate_email(seed: u32, _original: &str) -> String {
    let user_length = 5 + pick(seed, 0, 8);
    let user = random_lowercase(seed, user_length);
    let domain = EMAIL_DOMAINS[pick(seed, SECONDARY_DRAW_OFFSET, EMAIL_DOMAINS.len())];
    format!("{}@{}", user, domain)
}

fn generate_phone(seed: u32, _original: &str) -> String {
    let area = 200 + pick(seed, 0, 800);
    let exchange = 200 + pick(seed, 1, 800);
    let number = pick(seed, 2, 10_000);
    format!("{}-{}-{:04}", area, exchange, number)
}

fn generate_ssn(seed: u32, _original: &str) -> String {
    let area = 100 + pick(seed, 0, 900);
    let group = 10 + pick(seed, 1, 90);
    let serial = 1000 + pick(seed, 2, 9000);
    format!("{}-{:02}-{}", area, group, serial)
}

fn generate_credit_card(seed: u32, _original: &str) -> String {
    let mut digits = String::with_capacity(16);
    digits.push('4');
    for i in 0..15 {
        digits.push_str(&pick(seed, i, 10).to_string());
    }
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_hostname(seed: u32, _original: &str) -> String {
    let length = 5 + pick(seed, 0, 8);
    let name = random_lowercase(seed, length);
    let tld = HOSTNAME_TLDS[pick(seed, SECONDARY_DRAW_OFFSET, HOSTNAME_TLDS.len())];
    format!("{}.{}", name, tld)
}
