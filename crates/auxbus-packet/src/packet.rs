//! Frame encoding and decoding.
//!
//! A [`Packet`] is the logical unit exchanged on the bus. It is a plain
//! value: constructed for one exchange, encoded, and discarded. The wire
//! `length` field is always derived from the payload size on encode and
//! validated against the buffer size on decode, never stored.

use crate::constants::{AUX_HEADER, MIN_FRAME_SIZE};
use crate::endpoint::Endpoint;
use crate::error::FrameError;
use crate::opcode::Opcode;

/// A logical frame: who it is from, who it is for, what it asks, and the
/// command payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Originating endpoint.
    pub source: Endpoint,
    /// Addressed endpoint.
    pub destination: Endpoint,
    /// Operation selector.
    pub command: Opcode,
    /// Command payload, owned by the frame.
    pub payload: Vec<u8>,
}

impl Packet {
    /// Create a new packet.
    pub fn new(
        source: Endpoint,
        destination: Endpoint,
        command: Opcode,
        payload: Vec<u8>,
    ) -> Self {
        Packet {
            source,
            destination,
            command,
            payload,
        }
    }

    /// Wire length byte: payload size plus the source, destination, and
    /// command bytes.
    pub fn length(&self) -> u8 {
        (self.payload.len() + 3) as u8
    }

    /// Encode the packet into its wire frame. Infallible; payload size is
    /// bounded by the transport's read buffer, which is enforced upstream.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.payload.len() + MIN_FRAME_SIZE);
        buf.push(AUX_HEADER);
        buf.push(self.length());
        buf.push(self.source.into());
        buf.push(self.destination.into());
        buf.push(self.command.into());
        buf.extend_from_slice(&self.payload);
        buf.push(checksum(&buf));
        buf
    }

    /// Decode a complete wire frame back into a packet.
    ///
    /// Validation order: size, header byte, length byte, endpoint/opcode
    /// bytes, checksum. A checksum mismatch is reported last, after every
    /// field has parsed; the wire is known to be noisy, so callers treat
    /// it as a retryable condition rather than a protocol violation.
    pub fn decode(buf: &[u8]) -> Result<Packet, FrameError> {
        if buf.len() < MIN_FRAME_SIZE {
            return Err(FrameError::FrameTooShort {
                expected: MIN_FRAME_SIZE,
                actual: buf.len(),
            });
        }
        if buf[0] != AUX_HEADER {
            return Err(FrameError::BadHeader { actual: buf[0] });
        }
        let length = buf[1] as usize;
        if buf.len() != length + 3 {
            return Err(FrameError::LengthMismatch {
                declared: length,
                actual: buf.len(),
            });
        }

        let source = Endpoint::try_from(buf[2])?;
        let destination = Endpoint::try_from(buf[3])?;
        let command = Opcode::try_from(buf[4])?;
        let payload = buf[5..buf.len() - 1].to_vec();

        let expected = checksum(buf);
        let actual = buf[buf.len() - 1];
        if expected != actual {
            log::warn!(
                "checksum mismatch: computed 0x{:02X}, frame carries 0x{:02X}",
                expected,
                actual
            );
            return Err(FrameError::ChecksumMismatch { expected, actual });
        }

        Ok(Packet {
            source,
            destination,
            command,
            payload,
        })
    }
}

/// Compute the frame checksum: wrapping 8-bit sum of the length, source,
/// destination, command, and payload bytes (offsets `1..=length+1`),
/// negated in two's complement.
///
/// Reads only the covered range, so it works on a buffer still missing
/// its final checksum byte as well as on a complete frame.
pub fn checksum(buf: &[u8]) -> u8 {
    let length = buf[1] as usize;
    let mut sum: u8 = 0;
    for &byte in &buf[1..length + 2] {
        sum = sum.wrapping_add(byte);
    }
    0u8.wrapping_sub(sum)
}
