//! Field keys and setters
//!
//! Each record maps the keys it understands to a setter function. Decoding
//! looks the key up once and calls the setter; keys without a setter take
//! the unrecognized branch in the codec.

use crate::config::{Config, ErrKeyMapping, IntegerPolicy};
use crate::error::{PircsError, Result};
use crate::protocol::{Acknowledgement, Command};

/// A text field key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `"ack"`, acknowledgement status
    Ack,
    /// `"err"`, acknowledgement error code
    Err,
    /// `"com"`, command class
    Com,
    /// `"par"`, parameter
    Par,
    /// `"int"`, interpretation
    Int,
    /// `"mod"`, modifier
    Mod,
    /// `"val"`, value
    Val,
}

/// Quoted key literals as they appear on the wire
const KEY_TABLE: [(&str, Key); 7] = [
    ("\"ack\"", Key::Ack),
    ("\"err\"", Key::Err),
    ("\"com\"", Key::Com),
    ("\"par\"", Key::Par),
    ("\"int\"", Key::Int),
    ("\"mod\"", Key::Mod),
    ("\"val\"", Key::Val),
];

impl Key {
    /// Bare key name, without quotes
    pub fn name(self) -> &'static str {
        match self {
            Key::Ack => "ack",
            Key::Err => "err",
            Key::Com => "com",
            Key::Par => "par",
            Key::Int => "int",
            Key::Mod => "mod",
            Key::Val => "val",
        }
    }

    /// Look up a trimmed key token, quotes included
    pub fn from_token(token: &str) -> Option<Key> {
        KEY_TABLE
            .iter()
            .find(|(literal, _)| *literal == token)
            .map(|(_, key)| *key)
    }
}

/// Encoded shape of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// `"X"`
    Char(u8),
    /// `123`
    Int(i32),
    /// `"123"`
    QuotedUint(u32),
}

/// Assigns one decoded value token to a record
pub type Setter<T> = fn(&mut T, &str, &Config) -> Result<()>;

/// A record with a fixed-key text form
pub trait TextRecord: Default {
    /// Record name used in log messages
    const NAME: &'static str;

    /// Keys in encoding order; the text form carries exactly this many pairs
    const KEYS: &'static [Key];

    /// Value of the field behind `key`, for encoding
    fn field(&self, key: Key) -> FieldValue;

    /// Setter for `key`, or `None` if the record has no such field
    fn setter(key: Key, config: &Config) -> Option<Setter<Self>>;
}

// =============================================================================
// Value parsing
// =============================================================================

/// Character after the opening quote of a `"X"` token
///
/// Encoding writes each byte as the char of the same code point, so the
/// char is mapped back to its byte. 0 if the token is shorter or the char
/// lies above U+00FF.
pub fn char_value(token: &str) -> u8 {
    token
        .chars()
        .nth(1)
        .and_then(|c| u8::try_from(c).ok())
        .unwrap_or(0)
}

/// Value of the leading `[+-]?[0-9]+` prefix, 0 if there is none
pub fn leading_int(token: &str) -> i64 {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let magnitude = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn strip_quotes(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(token)
}

fn parse_integer<T>(key: Key, token: &str, policy: IntegerPolicy) -> Result<T>
where
    T: TryFrom<i64> + std::str::FromStr + Default,
{
    match policy {
        IntegerPolicy::Strict => token.parse::<T>().map_err(|_| PircsError::InvalidInteger {
            key: key.name().to_string(),
            value: token.to_string(),
        }),
        IntegerPolicy::Lenient => {
            let value = leading_int(token);
            match T::try_from(value) {
                Ok(parsed) => Ok(parsed),
                Err(_) => {
                    tracing::debug!("Value {:?} for {} out of range, using 0", token, key.name());
                    Ok(T::default())
                }
            }
        }
    }
}

// =============================================================================
// Setters
// =============================================================================

macro_rules! char_setter {
    ($name:ident, $record:ty, $field:ident) => {
        fn $name(record: &mut $record, value: &str, _: &Config) -> Result<()> {
            record.$field = char_value(value);
            Ok(())
        }
    };
}

char_setter!(command_com, Command, command);
char_setter!(command_par, Command, parameter);
char_setter!(command_int, Command, interpretation);
char_setter!(command_mod, Command, modifier);

fn command_val(record: &mut Command, value: &str, config: &Config) -> Result<()> {
    record.val = parse_integer(Key::Val, value, config.integer_policy)?;
    Ok(())
}

char_setter!(ack_ack, Acknowledgement, ack);
char_setter!(ack_com, Acknowledgement, command);
char_setter!(ack_par, Acknowledgement, parameter);
char_setter!(ack_int, Acknowledgement, interpretation);
char_setter!(ack_mod, Acknowledgement, modifier);

fn ack_err(record: &mut Acknowledgement, value: &str, config: &Config) -> Result<()> {
    let token = strip_quotes(value);
    record.err = match config.integer_policy {
        // Wraps like a signed parse stored into a u32: "-5" is 4294967291.
        IntegerPolicy::Lenient => leading_int(token) as u32,
        IntegerPolicy::Strict => parse_integer(Key::Err, token, IntegerPolicy::Strict)?,
    };
    Ok(())
}

fn ack_val(record: &mut Acknowledgement, value: &str, config: &Config) -> Result<()> {
    record.val = parse_integer(Key::Val, value, config.integer_policy)?;
    Ok(())
}

// Legacy dispatch: the quoted err token has no leading digits, so this is 0.
fn ack_err_legacy(record: &mut Acknowledgement, value: &str, _: &Config) -> Result<()> {
    record.ack = leading_int(value) as u8;
    Ok(())
}

// =============================================================================
// Records
// =============================================================================

impl TextRecord for Command {
    const NAME: &'static str = "command";

    const KEYS: &'static [Key] = &[Key::Com, Key::Par, Key::Int, Key::Mod, Key::Val];

    fn field(&self, key: Key) -> FieldValue {
        match key {
            Key::Com => FieldValue::Char(self.command),
            Key::Par => FieldValue::Char(self.parameter),
            Key::Int => FieldValue::Char(self.interpretation),
            Key::Mod => FieldValue::Char(self.modifier),
            Key::Val => FieldValue::Int(self.val),
            Key::Ack | Key::Err => FieldValue::Char(0),
        }
    }

    fn setter(key: Key, _config: &Config) -> Option<Setter<Self>> {
        let setter: Setter<Self> = match key {
            Key::Com => command_com,
            Key::Par => command_par,
            Key::Int => command_int,
            Key::Mod => command_mod,
            Key::Val => command_val,
            Key::Ack | Key::Err => return None,
        };
        Some(setter)
    }
}

impl TextRecord for Acknowledgement {
    const NAME: &'static str = "acknowledgement";

    const KEYS: &'static [Key] = &[
        Key::Ack,
        Key::Err,
        Key::Com,
        Key::Par,
        Key::Int,
        Key::Mod,
        Key::Val,
    ];

    fn field(&self, key: Key) -> FieldValue {
        match key {
            Key::Ack => FieldValue::Char(self.ack),
            Key::Err => FieldValue::QuotedUint(self.err),
            Key::Com => FieldValue::Char(self.command),
            Key::Par => FieldValue::Char(self.parameter),
            Key::Int => FieldValue::Char(self.interpretation),
            Key::Mod => FieldValue::Char(self.modifier),
            Key::Val => FieldValue::Int(self.val),
        }
    }

    fn setter(key: Key, config: &Config) -> Option<Setter<Self>> {
        let legacy = config.err_key == ErrKeyMapping::LegacyAlias;
        let setter: Setter<Self> = match key {
            Key::Ack => ack_ack,
            Key::Err if legacy => ack_err_legacy,
            Key::Err => ack_err,
            Key::Com if legacy => ack_ack,
            Key::Com => ack_com,
            Key::Par => ack_par,
            Key::Int => ack_int,
            Key::Mod => ack_mod,
            Key::Val => ack_val,
        };
        Some(setter)
    }
}
