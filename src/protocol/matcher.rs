//! Command/acknowledgement matching
//!
//! Correlation is purely field-by-field: the protocol has no sequence number.

use super::{Acknowledgement, Command};

/// True if `ack` describes the same request as `command`, regardless of success
pub fn subjects_match(command: &Command, ack: &Acknowledgement) -> bool {
    command.command == ack.command
        && command.parameter == ack.parameter
        && command.interpretation == ack.interpretation
        && command.modifier == ack.modifier
        && command.val == ack.val
}

/// True if `ack` answers `command` and reports success
pub fn is_successful_match(command: &Command, ack: &Acknowledgement) -> bool {
    subjects_match(command, ack) && ack.is_success()
}
