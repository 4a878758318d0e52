//! Mask strategy: overwrites characters with a mask character.

use super::Strategy;
use crate::config::FormatOptions;

pub const DEFAULT_MASK_CHAR: &str = "*";

#[derive(Debug, Clone)]
pub struct MaskStrategy {
    mask_char: String,
    preserve_structure: bool,
}

impl MaskStrategy {
    pub fn new(options: &FormatOptions) -> Self {
        let mask_char = options
            .mask_char
            .clone()
            .filter(|mask| !mask.is_empty())
            .unwrap_or_else(|| DEFAULT_MASK_CHAR.to_string());
        Self {
            mask_char,
            preserve_structure: options.preserve_structure.unwrap_or(true),
        }
    }
}

impl Strategy for MaskStrategy {
    fn redact(&self, value: &str, _pattern_type: &str, _counter: usize) -> String {
        if !self.preserve_structure {
            return self.mask_char.repeat(value.chars().count());
        }

        // Separators survive so `555-123-4567` still reads as a phone number.
        let mut masked = String::with_capacity(value.len());
        for c in value.chars() {
            if c.is_ascii_alphanumeric() {
                masked.push_str(&self.mask_char);
            } else {
                masked.push(c);
            }
        }
        masked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(mask_char: Option<&str>, preserve_structure: Option<bool>) -> MaskStrategy {
        MaskStrategy::new(&FormatOptions {
            mask_char: mask_char.map(str::to_string),
            preserve_structure,
            ..FormatOptions::default()
        })
    }

    #[test]
    fn test_preserves_structure_by_default() {
        let mask = strategy(None, None);
        assert_eq!(mask.redact("555-123-4567", "phone", 1), "***-***-****");
        assert_eq!(mask.redact("john.doe@company.com", "email", 1), "****.***@*******.***");
        assert_eq!(mask.redact("00:1B:44:11:3A:B8", "macAddress", 1), "**:**:**:**:**:**");
    }

    #[test]
    fn test_flat_mask_keeps_length() {
        let mask = strategy(Some("#"), Some(false));
        for value in ["10.0.0.1", "a", "john.doe@company.com", "Zoë Ångström"] {
            let masked = mask.redact(value, "email", 1);
            assert_eq!(masked.chars().count(), value.chars().count());
            assert!(masked.chars().all(|c| c == '#'));
        }
    }

    #[test]
    fn test_empty_mask_char_falls_back_to_default() {
        let mask = strategy(Some(""), Some(false));
        assert_eq!(mask.redact("1234", "ssn", 1), "****");
    }

    #[test]
    fn test_non_ascii_letters_are_kept_with_structure() {
        let mask = strategy(Some("X"), None);
        assert_eq!(mask.redact("Zoë-9", "name", 1), "XXë-X");
    }
}
