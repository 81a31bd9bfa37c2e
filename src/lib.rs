//! # PIRCS
//!
//! Codec for a small set-parameter protocol between a controller and a device:
//! - Fixed 8-byte binary wire form for commands (network byte order value)
//! - Fixed-key, single-line text form for commands and acknowledgements
//! - Derivation of success/error acknowledgements from a command
//! - Matching an acknowledgement against the command it answers
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Transport (caller supplied)                  │
//! │              serial line / socket / radio link               │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │ bytes                        │ text
//!                ▼                              ▼
//!   ┌────────────────────────┐     ┌────────────────────────────┐
//!   │     Binary Codec       │     │        Text Codec          │
//!   │  (protocol::codec)     │     │ tokenizer → key → setter   │
//!   └───────────┬────────────┘     └──────────────┬─────────────┘
//!               │                                 │
//!               └───────────────┬─────────────────┘
//!                               ▼
//!                ┌─────────────────────────────┐
//!                │  Command / Acknowledgement  │
//!                └──────────────┬──────────────┘
//!                               ▼
//!                ┌─────────────────────────────┐
//!                │          Matcher            │
//!                └─────────────────────────────┘
//! ```
//!
//! Every function is a one-shot conversion over its arguments: there is no
//! shared state, so all of them are safe to call from any thread.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod text;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PircsError, Result};
pub use config::Config;
pub use protocol::{
    Acknowledgement, Command, WIRE_SIZE, decode_command, encode_command, error_ack,
    is_successful_match, subjects_match, success_ack,
};
pub use text::{decode_ack_text, decode_command_text, encode_ack_text, encode_command_text};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the PIRCS codec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
