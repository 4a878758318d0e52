// redactor-core/tests/redaction_scenarios.rs
use anyhow::Result;
use test_log::test; // For integrating with `env_logger` in tests

use redactor_core::{
    CustomPattern, DataRedactor, FormatOptions, PatternConfig, PatternKind, RedactionEngine,
    RedactionStrategy, RedactorConfig,
};

fn with_entities(category: &str, values: &[&str]) -> RedactorConfig {
    let mut config = RedactorConfig::default();
    config.custom_entities.insert(
        category.to_string(),
        values.iter().map(|v| v.to_string()).collect(),
    );
    config
}

fn assert_no_intersections(matches: &[redactor_core::Match]) {
    for pair in matches.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "matches intersect: {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn scenario_single_ipv4_is_tokenized() -> Result<()> {
    let mut redactor = DataRedactor::with_default_config()?;
    let result = redactor.redact("Contact me at 10.0.0.1");

    assert_eq!(result.redacted_text, "Contact me at [IPV4_1]");
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].pattern_type, "ipv4");
    assert_eq!(result.matches[0].value, "10.0.0.1");
    Ok(())
}

#[test]
fn scenario_value_is_stable_across_calls() -> Result<()> {
    let mut redactor = DataRedactor::with_default_config()?;

    let first = redactor.redact("Server 192.168.1.100 is down");
    let second = redactor.redact("Retrying 192.168.1.100 now");
    assert_eq!(first.redacted_text, "Server [IPV4_1] is down");
    assert_eq!(second.redacted_text, "Retrying [IPV4_1] now");
    assert_eq!(redactor.context().counter("ipv4"), 1);
    Ok(())
}

#[test]
fn scenario_custom_entities_and_builtins_together() -> Result<()> {
    let mut redactor = DataRedactor::new(with_entities("companyNames", &["Acme Corp"]))?;
    let result = redactor.redact("Acme Corp reported an issue from 10.0.0.1");

    assert_eq!(
        result.redacted_text,
        "[COMPANY_NAMES_1] reported an issue from [IPV4_1]"
    );
    let types: Vec<&str> = result.matches.iter().map(|m| m.pattern_type.as_str()).collect();
    assert_eq!(types, vec!["companyNames", "ipv4"]);
    assert_no_intersections(&result.matches);
    Ok(())
}

#[test]
fn scenario_entities_are_case_insensitive_whole_words() -> Result<()> {
    let mut redactor = DataRedactor::new(with_entities("companyNames", &["Acme", "Acme Corp"]))?;
    let result = redactor.redact("ACME CORP and acme, but not Acmeville");

    assert_eq!(
        result.redacted_text,
        "[COMPANY_NAMES_1] and [COMPANY_NAMES_2], but not Acmeville"
    );
    Ok(())
}

#[test]
fn scenario_lower_start_wins_overlap() -> Result<()> {
    let mut config = RedactorConfig::default();
    config.patterns.custom = Some(vec![CustomPattern {
        name: Some("localNumber".to_string()),
        regex: Some(r"\d{3}-\d{4}".to_string()),
        strategy: Some("token".to_string()),
        flags: None,
    }]);
    let mut redactor = DataRedactor::new(config)?;

    // The custom pattern finds "123-4567" at 9, but the phone match starts at 5.
    let result = redactor.redact("call 555-123-4567");
    assert_eq!(result.redacted_text, "call [PHONE_1]");
    assert_eq!(result.matches.len(), 1);

    // On its own, the custom pattern wins.
    let result = redactor.redact("ext 123-4567");
    assert_eq!(result.redacted_text, "ext [LOCAL_NUMBER_1]");
    Ok(())
}

#[test]
fn scenario_equal_start_prefers_earlier_pattern() -> Result<()> {
    let mut redactor = DataRedactor::with_default_config()?;
    // hostname also matches "john.doe" at the same offset; email is scanned first.
    let result = redactor.redact("write to john.doe@company.com today");

    assert_eq!(result.redacted_text, "write to [EMAIL_1] today");
    assert_eq!(result.matches[0].pattern_type, "email");
    Ok(())
}

#[test]
fn scenario_reset_restarts_counters() -> Result<()> {
    let mut redactor = DataRedactor::with_default_config()?;
    let text = "a 10.0.0.1 b 10.0.0.2";

    let first = redactor.redact(text);
    let again = redactor.redact("10.0.0.3");
    assert_eq!(again.redacted_text, "[IPV4_3]");

    redactor.reset();
    let after_reset = redactor.redact(text);
    assert_eq!(first.redacted_text, after_reset.redacted_text);
    assert_eq!(after_reset.redacted_text, "a [IPV4_1] b [IPV4_2]");
    assert_eq!(after_reset.mapping.len(), 2);
    Ok(())
}

#[test]
fn mapping_accumulates_over_the_session() -> Result<()> {
    let mut redactor = DataRedactor::with_default_config()?;
    redactor.redact("SSN 123-45-6789");
    let result = redactor.redact("mail a@b.io");

    assert_eq!(result.mapping.len(), 2);
    assert_eq!(result.mapping["123-45-6789"], "[SSN_1]");
    assert_eq!(result.mapping["a@b.io"], "[EMAIL_1]");
    Ok(())
}

#[test]
fn token_template_substitutes_every_placeholder() -> Result<()> {
    let mut config = RedactorConfig::default();
    config.format_options = FormatOptions {
        token_format: Some("{{TYPE}}-{INDEX}/{INDEX}".to_string()),
        ..FormatOptions::default()
    };
    let mut redactor = DataRedactor::new(config)?;

    let result = redactor.redact("paid, ending in 4242");
    assert_eq!(result.redacted_text, "paid, {CREDIT_CARD_LAST4}-1/1");
    Ok(())
}

#[test]
fn mask_without_structure_preserves_length() -> Result<()> {
    let mut config = RedactorConfig::default();
    config.format_options.preserve_structure = Some(false);
    config.format_options.mask_char = Some("#".to_string());
    for kind in [PatternKind::Email, PatternKind::Phone, PatternKind::Ipv4] {
        config.patterns.set(
            kind,
            PatternConfig {
                strategy: "mask".to_string(),
                ..PatternConfig::default()
            },
        );
    }
    let mut redactor = DataRedactor::new(config)?;

    let text = "reach john.doe@company.com or 555-123-4567 via 10.0.0.1";
    let result = redactor.redact(text);
    assert_eq!(result.redacted_text.chars().count(), text.chars().count());
    for m in &result.matches {
        assert_eq!(m.strategy, RedactionStrategy::Mask);
        assert_eq!(result.mapping[&m.value], "#".repeat(m.value.chars().count()));
    }
    Ok(())
}

#[test]
fn format_preserving_substitutes_keep_their_shape() -> Result<()> {
    let mut config = RedactorConfig::default();
    for kind in [PatternKind::Ipv4, PatternKind::Ssn, PatternKind::TicketNumber] {
        config.patterns.set(
            kind,
            PatternConfig {
                strategy: "formatPreserving".to_string(),
                ..PatternConfig::default()
            },
        );
    }
    let mut redactor = DataRedactor::new(config)?;

    let result = redactor.redact("Ticket #12345 from 10.0.0.1, SSN 123-45-6789");
    assert_eq!(result.mapping["10.0.0.1"], "10.93.0.150");
    assert_eq!(result.mapping["Ticket #12345"], "REDACTED_1");
    let ssn = &result.mapping["123-45-6789"];
    assert_eq!(ssn.split('-').map(str::len).collect::<Vec<_>>(), vec![3, 2, 4]);

    // Same value, same session: same substitute.
    let again = redactor.redact("10.0.0.1");
    assert_eq!(again.redacted_text, "10.93.0.150");
    Ok(())
}

#[test]
fn builtin_sample_document_is_fully_redacted() -> Result<()> {
    let config = RedactorConfig::default_config();
    let sample = config.test_data.clone().unwrap_or_default();
    let mut redactor = DataRedactor::new(config)?;
    let result = redactor.redact(&sample);

    assert_no_intersections(&result.matches);
    for secret in [
        "Ticket #12345",
        "john.doe@company.com",
        "555-123-4567",
        "(555) 987-6543",
        "123-45-6789",
        "192.168.1.100",
        "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
        "00-1B-44-11-3A-B8",
        "mail.example.com",
        "4532-1234-5678-9010",
        "5425233430109903",
        "378282246310005",
        "203.0.113.45",
        "api.internal.company.net",
        "support@company.com",
    ] {
        assert!(!result.redacted_text.contains(secret), "{} survived redaction", secret);
        assert!(result.mapping.contains_key(secret), "{} missing from mapping", secret);
    }
    for token in ["[TICKET_NUMBER_1]", "[IPV6_1]", "[MAC_ADDRESS_1]", "[CREDIT_CARD_LAST4_1]", "[CREDIT_CARD_3]"] {
        assert!(result.redacted_text.contains(token), "{} not produced", token);
    }
    // No name matcher was supplied.
    assert!(result.redacted_text.contains("John Doe"));
    Ok(())
}

#[test]
fn dry_run_matches_what_redact_applies() -> Result<()> {
    let mut redactor = DataRedactor::with_default_config()?;
    let text = "From 10.0.0.1 to mail.example.com, SSN 123-45-6789";

    let preview = redactor.find_matches(text);
    let summary = redactor.summarize(text);
    let result = redactor.redact(text);

    assert_eq!(preview, result.matches);
    let types: Vec<&str> = summary.iter().map(|s| s.pattern_type.as_str()).collect();
    assert_eq!(types, vec!["hostname", "ipv4", "ssn"]);
    Ok(())
}
