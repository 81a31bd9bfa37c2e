//! Acknowledgement definitions
//!
//! A device's answer to a Command. The acknowledgement echoes the command's
//! identity fields and value; there is no separate correlation id.

use serde::{Deserialize, Serialize};

use super::Command;

/// `ack` value signalling success
pub const ACK_SUCCESS: u8 = b'S';

/// A device's response to a Command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// `'S'` on success, anything else on failure
    pub ack: u8,

    /// 0 on success, caller-defined code on failure
    pub err: u32,

    pub command: u8,
    pub parameter: u8,
    pub interpretation: u8,
    pub modifier: u8,
    pub val: i32,
}

impl Acknowledgement {
    /// Build a successful acknowledgement echoing `command`
    pub fn success(command: &Command) -> Self {
        Self::error(command, ACK_SUCCESS, 0)
    }

    /// Build an acknowledgement echoing `command` with the given status
    pub fn error(command: &Command, ack: u8, err: u32) -> Self {
        Self {
            ack,
            err,
            command: command.command,
            parameter: command.parameter,
            interpretation: command.interpretation,
            modifier: command.modifier,
            val: command.val,
        }
    }

    /// True when `ack` is `'S'` and `err` is 0
    pub fn is_success(&self) -> bool {
        self.ack == ACK_SUCCESS && self.err == 0
    }

    /// The command this acknowledgement echoes
    pub fn echoed_command(&self) -> Command {
        Command::new(
            self.command,
            self.parameter,
            self.interpretation,
            self.modifier,
            self.val,
        )
    }
}

/// Derive a success acknowledgement from a command
pub fn success_ack(command: &Command) -> Acknowledgement {
    Acknowledgement::success(command)
}

/// Derive an error acknowledgement from a command
pub fn error_ack(command: &Command, ack: u8, err: u32) -> Acknowledgement {
    Acknowledgement::error(command, ack, err)
}
