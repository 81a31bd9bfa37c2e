//! Binary codec
//!
//! Encoding and decoding of a Command in its fixed 8-byte wire form.
//!
//! ## Wire Format
//! ```text
//! ┌─────────┬─────────┬─────────┬─────────┬──────────────────────┐
//! │ Com (1) │ Par (1) │ Int (1) │ Mod (1) │   Val (4, i32 BE)    │
//! └─────────┴─────────┴─────────┴─────────┴──────────────────────┘
//! ```
//!
//! Messages are not framed or length-prefixed; the transport delivers exactly
//! one wire form per message.

use std::io::{Read, Write};

use bytes::{Buf, BufMut};

use super::Command;
use crate::error::{PircsError, Result};

/// Size of a Command on the wire
pub const WIRE_SIZE: usize = 8;

// =============================================================================
// Buffer Encoding/Decoding
// =============================================================================

/// Encode a command into the front of `buf`
///
/// Returns the number of bytes written (always `WIRE_SIZE`). Nothing is
/// written if `buf` is shorter than `WIRE_SIZE`.
pub fn encode_command(command: &Command, buf: &mut [u8]) -> Result<usize> {
    let mut out = buf;
    encode_command_to(command, &mut out)
}

/// Decode a command from the front of `buf`
///
/// Bytes past `WIRE_SIZE` are ignored.
pub fn decode_command(buf: &[u8]) -> Result<Command> {
    let mut src = buf;
    decode_command_from(&mut src)
}

/// Encode a command into any `BufMut`, advancing it by `WIRE_SIZE`
pub fn encode_command_to<B: BufMut>(command: &Command, dst: &mut B) -> Result<usize> {
    if dst.remaining_mut() < WIRE_SIZE {
        return Err(PircsError::BufferTooSmall {
            needed: WIRE_SIZE,
            available: dst.remaining_mut(),
        });
    }

    dst.put_u8(command.command);
    dst.put_u8(command.parameter);
    dst.put_u8(command.interpretation);
    dst.put_u8(command.modifier);
    dst.put_i32(command.val);

    Ok(WIRE_SIZE)
}

/// Decode a command from any `Buf`, advancing it by `WIRE_SIZE`
pub fn decode_command_from<B: Buf>(src: &mut B) -> Result<Command> {
    if src.remaining() < WIRE_SIZE {
        return Err(PircsError::BufferTooSmall {
            needed: WIRE_SIZE,
            available: src.remaining(),
        });
    }

    Ok(Command {
        command: src.get_u8(),
        parameter: src.get_u8(),
        interpretation: src.get_u8(),
        modifier: src.get_u8(),
        val: src.get_i32(),
    })
}

impl Command {
    /// The command's wire form
    pub fn to_wire(&self) -> [u8; WIRE_SIZE] {
        let val = self.val.to_be_bytes();
        [
            self.command,
            self.parameter,
            self.interpretation,
            self.modifier,
            val[0],
            val[1],
            val[2],
            val[3],
        ]
    }

    /// Build a command from its wire form
    pub fn from_wire(wire: &[u8; WIRE_SIZE]) -> Self {
        Self {
            command: wire[0],
            parameter: wire[1],
            interpretation: wire[2],
            modifier: wire[3],
            val: i32::from_be_bytes([wire[4], wire[5], wire[6], wire[7]]),
        }
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one command from a stream
///
/// Blocks until `WIRE_SIZE` bytes are received or an error occurs
pub fn read_command<R: Read>(reader: &mut R) -> Result<Command> {
    let mut wire = [0u8; WIRE_SIZE];
    reader.read_exact(&mut wire)?;

    let command = Command::from_wire(&wire);
    tracing::trace!("Read command {:?}", command);
    Ok(command)
}

/// Write one command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    writer.write_all(&command.to_wire())?;
    writer.flush()?;
    Ok(())
}
