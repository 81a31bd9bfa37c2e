//! Text codec
//!
//! Encoding and decoding of records in their fixed-key text form.
//!
//! ## Text Format
//! ```text
//! Command:         {"com":"S","par":"m","int":"t","mod":"0","val":150}
//! Acknowledgement: {"ack":"S","err":"0","com":"S","par":"m","int":"t","mod":"0","val":150}
//! ```
//!
//! Decoding reads exactly as many key/value pairs as the record has fields,
//! in whatever order they appear. Tokens past the last pair are ignored.

use std::fmt;

use super::field::{FieldValue, Key, TextRecord};
use super::tokenizer::Tokens;
use crate::config::{Config, KeyPolicy, TextStyle};
use crate::error::{PircsError, Result};
use crate::protocol::{Acknowledgement, Command};

/// Result of a decode that tolerated unrecognized keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    /// The decoded record; fields behind unrecognized keys keep their default
    pub value: T,

    /// Trimmed key tokens that matched no field, in input order
    pub unrecognized: Vec<String>,
}

impl<T> Decoded<T> {
    /// True if every pair was assigned to a field
    pub fn is_complete(&self) -> bool {
        self.unrecognized.is_empty()
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode any text record
pub fn encode_text<T: TextRecord>(record: &T, style: TextStyle) -> String {
    let (open, separator, colon, close) = match style {
        TextStyle::Compact => ("{", ",", ":", "}"),
        TextStyle::Spaced => ("{ ", ", ", ": ", " }"),
    };

    let mut out = String::with_capacity(16 * T::KEYS.len());
    out.push_str(open);

    for (i, key) in T::KEYS.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push('"');
        out.push_str(key.name());
        out.push('"');
        out.push_str(colon);

        match record.field(*key) {
            FieldValue::Char(c) => {
                out.push('"');
                out.push(char::from(c));
                out.push('"');
            }
            FieldValue::Int(v) => out.push_str(&v.to_string()),
            FieldValue::QuotedUint(v) => {
                out.push('"');
                out.push_str(&v.to_string());
                out.push('"');
            }
        }
    }

    out.push_str(close);
    out
}

/// Encode a command in compact text form
pub fn encode_command_text(command: &Command) -> String {
    encode_text(command, TextStyle::Compact)
}

/// Encode an acknowledgement in compact text form
pub fn encode_ack_text(ack: &Acknowledgement) -> String {
    encode_text(ack, TextStyle::Compact)
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_command_text(self))
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_ack_text(self))
    }
}

// =============================================================================
// Decoding
// =============================================================================

fn trim(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Decode any text record
///
/// Fails with `TruncatedInput` if fewer than `T::KEYS.len()` pairs are
/// present. Unrecognized keys are handled per `config.key_policy`.
pub fn decode_text<T: TextRecord>(text: &str, config: &Config) -> Result<Decoded<T>> {
    let pairs = T::KEYS.len();
    let mut tokens = Tokens::new(text);
    let mut value = T::default();
    let mut unrecognized = Vec::new();

    for index in 0..pairs {
        let raw_key = tokens.next();
        let raw_value = tokens.next();
        let (raw_key, raw_value) = match (raw_key, raw_value) {
            (Some(k), Some(v)) => (k, v),
            (k, _) => {
                return Err(PircsError::TruncatedInput {
                    expected_pairs: pairs,
                    found_tokens: 2 * index + usize::from(k.is_some()),
                })
            }
        };

        let key = trim(raw_key);
        let field_value = trim(raw_value);

        match Key::from_token(key).and_then(|k| T::setter(k, config)) {
            Some(set) => set(&mut value, field_value, config)?,
            None => match config.key_policy {
                KeyPolicy::Report => {
                    tracing::error!("Key error in {} text: {}", T::NAME, key);
                    unrecognized.push(key.to_string());
                }
                KeyPolicy::Reject => return Err(PircsError::UnrecognizedKey(key.to_string())),
            },
        }
    }

    let trailing = tokens.filter(|t| !trim(t).is_empty()).count();
    if trailing > 0 {
        tracing::warn!("Ignoring {} trailing tokens after {} text", trailing, T::NAME);
    }

    Ok(Decoded {
        value,
        unrecognized,
    })
}

/// Decode a command with the default config
pub fn decode_command_text(text: &str) -> Result<Command> {
    decode_text::<Command>(text, &Config::default()).map(|decoded| decoded.value)
}

/// Decode an acknowledgement with the default config
pub fn decode_ack_text(text: &str) -> Result<Acknowledgement> {
    decode_text::<Acknowledgement>(text, &Config::default()).map(|decoded| decoded.value)
}

/// Decode a command, reporting unrecognized keys
pub fn decode_command_text_with(text: &str, config: &Config) -> Result<Decoded<Command>> {
    decode_text(text, config)
}

/// Decode an acknowledgement, reporting unrecognized keys
pub fn decode_ack_text_with(text: &str, config: &Config) -> Result<Decoded<Acknowledgement>> {
    decode_text(text, config)
}
