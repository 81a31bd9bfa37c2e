//! Configuration for PIRCS
//!
//! Centralized codec configuration with sensible defaults. The defaults
//! reproduce the wire behavior of deployed devices, except where noted on
//! the individual options.

/// Main configuration for the text codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Decoding
    // -------------------------------------------------------------------------
    /// How integer fields (`val`, `err`) are parsed
    pub integer_policy: IntegerPolicy,

    /// Where the acknowledgement's `"err"` key is stored
    pub err_key: ErrKeyMapping,

    /// What happens when a key is not part of the record
    pub key_policy: KeyPolicy,

    // -------------------------------------------------------------------------
    // Encoding
    // -------------------------------------------------------------------------
    /// Layout of the encoded text
    pub text_style: TextStyle,
}

/// Integer parsing policy for text decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegerPolicy {
    /// Parse the leading `[+-]?[0-9]+` prefix; anything else yields 0.
    /// A `val` out of `i32` range yields 0; an `err` wraps into `u32`.
    #[default]
    Lenient,

    /// The whole token must be a valid integer of the field's type
    Strict,
}

/// Destination of the `"err"` key when decoding an acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrKeyMapping {
    /// `"err"` fills the numeric error code
    #[default]
    ErrorCode,

    /// Legacy decoder dispatch: `"ack"`, `"err"` and `"com"` all write the
    /// `ack` slot, leaving `err` and `command` unset. `"err"` goes through the
    /// leading-digit parse of its still-quoted token, so it always stores 0.
    LegacyAlias,
}

/// Handling of keys the record does not know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Log the key, leave the field unset and keep decoding
    #[default]
    Report,

    /// Fail the decode with `UnrecognizedKey`
    Reject,
}

/// Text encoding layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// `{"com":"S","par":"m",...}`
    #[default]
    Compact,

    /// `{ "com": "S", "par": "m", ... }`
    Spaced,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Strict decoding: bad integers and unknown keys are errors
    pub fn strict() -> Self {
        Self::builder()
            .integer_policy(IntegerPolicy::Strict)
            .key_policy(KeyPolicy::Reject)
            .build()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the integer parsing policy
    pub fn integer_policy(mut self, policy: IntegerPolicy) -> Self {
        self.config.integer_policy = policy;
        self
    }

    /// Set where the acknowledgement `"err"` key is stored
    pub fn err_key(mut self, mapping: ErrKeyMapping) -> Self {
        self.config.err_key = mapping;
        self
    }

    /// Set the unknown-key policy
    pub fn key_policy(mut self, policy: KeyPolicy) -> Self {
        self.config.key_policy = policy;
        self
    }

    /// Set the text encoding layout
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.config.text_style = style;
        self
    }

    /// Finish building the config
    pub fn build(self) -> Config {
        self.config
    }
}
