//! Decode Policy Tests
//!
//! Tests for the configurable parts of text decoding.

use pircs::config::{Config, ErrKeyMapping, IntegerPolicy, KeyPolicy, TextStyle};
use pircs::protocol::{Command, error_ack, success_ack};
use pircs::text::{decode_ack_text_with, decode_command_text_with, encode_text};
use pircs::PircsError;

fn sample() -> Command {
    Command::new(b'S', b'm', b't', b'0', 150)
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.integer_policy, IntegerPolicy::Lenient);
    assert_eq!(config.err_key, ErrKeyMapping::ErrorCode);
    assert_eq!(config.key_policy, KeyPolicy::Report);
    assert_eq!(config.text_style, TextStyle::Compact);
}

#[test]
fn test_builder_sets_every_option() {
    let config = Config::builder()
        .integer_policy(IntegerPolicy::Strict)
        .err_key(ErrKeyMapping::LegacyAlias)
        .key_policy(KeyPolicy::Reject)
        .text_style(TextStyle::Spaced)
        .build();

    assert_eq!(config.integer_policy, IntegerPolicy::Strict);
    assert_eq!(config.err_key, ErrKeyMapping::LegacyAlias);
    assert_eq!(config.key_policy, KeyPolicy::Reject);
    assert_eq!(config.text_style, TextStyle::Spaced);
}

// =============================================================================
// Integer Policy Tests
// =============================================================================

#[test]
fn test_strict_rejects_non_numeric_val() {
    let config = Config::builder().integer_policy(IntegerPolicy::Strict).build();
    let text = r#"{"com":"S","par":"m","int":"t","mod":"0","val":12x}"#;

    match decode_command_text_with(text, &config) {
        Err(PircsError::InvalidInteger { key, value }) => {
            assert_eq!(key, "val");
            assert_eq!(value, "12x");
        }
        other => panic!("Expected InvalidInteger, got {:?}", other),
    }
}

#[test]
fn test_strict_rejects_out_of_range_val() {
    let config = Config::strict();
    let text = r#"{"com":"S","par":"m","int":"t","mod":"0","val":2147483648}"#;

    assert!(matches!(
        decode_command_text_with(text, &config),
        Err(PircsError::InvalidInteger { .. })
    ));
}

#[test]
fn test_strict_accepts_valid_text() {
    let config = Config::strict();
    let text = r#"{"ack":"E","err":"7","com":"S","par":"m","int":"t","mod":"0","val":150}"#;

    let decoded = decode_ack_text_with(text, &config).unwrap();
    assert_eq!(decoded.value, error_ack(&sample(), b'E', 7));
    assert!(decoded.is_complete());
}

#[test]
fn test_strict_rejects_negative_err() {
    let config = Config::strict();
    let text = r#"{"ack":"E","err":"-7","com":"S","par":"m","int":"t","mod":"0","val":150}"#;

    match decode_ack_text_with(text, &config) {
        Err(PircsError::InvalidInteger { key, value }) => {
            assert_eq!(key, "err");
            assert_eq!(value, "-7");
        }
        other => panic!("Expected InvalidInteger, got {:?}", other),
    }
}

// =============================================================================
// Key Policy Tests
// =============================================================================

#[test]
fn test_reject_policy_fails_on_unknown_key() {
    let config = Config::builder().key_policy(KeyPolicy::Reject).build();
    let text = r#"{"com":"S","par":"m","int":"t","mod":"0","vol":150}"#;

    match decode_command_text_with(text, &config) {
        Err(PircsError::UnrecognizedKey(key)) => assert_eq!(key, r#""vol""#),
        other => panic!("Expected UnrecognizedKey, got {:?}", other),
    }
}

#[test]
fn test_report_policy_collects_every_unknown_key() {
    let text = r#"{"com":"S","xx":"m","yy":"t","mod":"0","val":150}"#;
    let decoded = decode_command_text_with(text, &Config::default()).unwrap();

    assert_eq!(
        decoded.unrecognized,
        vec![r#""xx""#.to_string(), r#""yy""#.to_string()]
    );
    assert_eq!(decoded.value, Command::new(b'S', 0, 0, b'0', 150));
}

// =============================================================================
// Err Key Mapping Tests
// =============================================================================

#[test]
fn test_legacy_alias_shares_ack_slot() {
    let config = Config::builder().err_key(ErrKeyMapping::LegacyAlias).build();
    let text = r#"{"ack":"E","err":"7","com":"X","par":"m","int":"t","mod":"0","val":150}"#;

    let ack = decode_ack_text_with(text, &config).unwrap().value;

    // "com" is the last writer of the shared slot
    assert_eq!(ack.ack, b'X');
    assert_eq!(ack.err, 0);
    assert_eq!(ack.command, 0);
    assert_eq!(ack.parameter, b'm');
    assert_eq!(ack.interpretation, b't');
    assert_eq!(ack.modifier, b'0');
    assert_eq!(ack.val, 150);
}

#[test]
fn test_legacy_alias_err_last_clears_ack() {
    let config = Config::builder().err_key(ErrKeyMapping::LegacyAlias).build();
    let text = r#"{"com":"S","ack":"S","err":"0","par":"m","int":"t","mod":"0","val":150}"#;

    let ack = decode_ack_text_with(text, &config).unwrap().value;
    assert_eq!(ack.ack, 0);
    assert!(!ack.is_success());
}

#[test]
fn test_legacy_alias_breaks_round_trip() {
    let config = Config::builder().err_key(ErrKeyMapping::LegacyAlias).build();
    let original = success_ack(&sample());
    let text = encode_text(&original, TextStyle::Compact);

    let decoded = decode_ack_text_with(&text, &config).unwrap().value;
    assert_ne!(decoded, original);
    assert_eq!(decoded.ack, b'S');
    assert_eq!(decoded.command, 0);
}

#[test]
fn test_error_code_mapping_round_trips() {
    let original = error_ack(&sample(), b'F', 123_456);
    let text = encode_text(&original, TextStyle::Spaced);

    let decoded = decode_ack_text_with(&text, &Config::default()).unwrap().value;
    assert_eq!(decoded, original);
}
