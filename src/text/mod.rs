//! Text Module
//!
//! Single-line, fixed-key text form of commands and acknowledgements.
//!
//! ## Responsibilities
//! - Encode records with a fixed key order and no embedded whitespace
//! - Tokenize on `{` `,` `:` `}` and decode a fixed number of key/value pairs
//! - Dispatch each key to a field setter, reporting keys that match none
//!
//! This is deliberately not a JSON parser: quoted values cannot contain
//! delimiters, objects cannot nest, and escapes are not understood.

mod tokenizer;
mod field;
mod codec;

pub use tokenizer::{Tokens, tokenize, DELIMITERS};
pub use field::{Key, FieldValue, Setter, TextRecord, char_value, leading_int};
pub use codec::{
    Decoded, encode_text, encode_command_text, encode_ack_text, decode_text,
    decode_command_text, decode_ack_text, decode_command_text_with, decode_ack_text_with,
};
