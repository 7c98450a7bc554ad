//! Frame error types.

use thiserror::Error;

/// Errors that can occur when decoding a wire frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Frame is too short to be valid.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Byte 0 is not the frame header sentinel.
    #[error("bad header byte: expected 0x3B, got 0x{actual:02X}")]
    BadHeader {
        /// The byte found at offset 0.
        actual: u8,
    },

    /// The declared length does not match the frame size.
    #[error("frame length mismatch: declared {declared}, frame holds {actual} bytes")]
    LengthMismatch {
        /// Length byte as read from the wire.
        declared: usize,
        /// Total bytes in the frame (must equal declared + 3).
        actual: usize,
    },

    /// Endpoint address byte outside the known address space.
    #[error("unknown endpoint address: 0x{0:02X}")]
    UnknownEndpoint(u8),

    /// Command code byte outside the known command set.
    #[error("unknown command code: 0x{0:02X}")]
    UnknownOpcode(u8),

    /// The checksum byte does not match the frame contents.
    #[error("checksum mismatch: computed 0x{expected:02X}, frame carries 0x{actual:02X}")]
    ChecksumMismatch {
        /// Checksum recomputed over the frame.
        expected: u8,
        /// Checksum byte carried by the frame.
        actual: u8,
    },
}
