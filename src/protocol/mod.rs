//! Protocol Module
//!
//! Records of the set-parameter protocol, their binary wire form and the
//! rules correlating an acknowledgement with the command it answers.
//!
//! ## Command Wire Format
//! ```text
//! offset 0: command         (1 byte)
//! offset 1: parameter       (1 byte)
//! offset 2: interpretation  (1 byte)
//! offset 3: modifier        (1 byte)
//! offset 4-7: val           (i32, network byte order)
//! ```
//!
//! ### Acknowledgement Status
//! - `ack == 'S'` and `err == 0`: success
//! - anything else: failure, `err` carries a caller-defined code
//!
//! Acknowledgements travel only in text form; see [`crate::text`].

mod command;
mod acknowledgement;
mod codec;
mod matcher;

pub use command::Command;
pub use acknowledgement::{Acknowledgement, ACK_SUCCESS, success_ack, error_ack};
pub use codec::{
    WIRE_SIZE, encode_command, decode_command, encode_command_to, decode_command_from,
    read_command, write_command,
};
pub use matcher::{subjects_match, is_successful_match};
