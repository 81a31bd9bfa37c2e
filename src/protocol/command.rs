//! Command definitions
//!
//! A request to set one parameter on a device.

use serde::{Deserialize, Serialize};

/// A set-parameter command
///
/// The four character fields are single bytes and are carried verbatim;
/// the codecs never validate them against a known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Command {
    /// Command class
    pub command: u8,

    /// Which parameter is addressed
    pub parameter: u8,

    /// Conventionally minimum, maximum or target
    pub interpretation: u8,

    /// Caller-defined modifier
    pub modifier: u8,

    /// The value to set
    pub val: i32,
}

impl Command {
    /// Create a command from its five fields
    pub fn new(command: u8, parameter: u8, interpretation: u8, modifier: u8, val: i32) -> Self {
        Self {
            command,
            parameter,
            interpretation,
            modifier,
            val,
        }
    }
}
