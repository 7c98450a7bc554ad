//! AUX Bus Packet Protocol
//!
//! This crate provides the wire frame codec for the AUX packet protocol
//! used to address peripheral controllers (motor boards, focusers, GPS
//! units, ...) on a shared serial bus inside a telescope mount. Each frame
//! carries a source and destination endpoint, a single-byte command, a
//! variable-length payload, and a two's-complement checksum.
//!
//! # Frame Format
//!
//! ```text
//! +------+--------+--------+------+-----+-------------+----------+
//! | 0x3B | length | source | dest | cmd | payload[..] | checksum |
//! +------+--------+--------+------+-----+-------------+----------+
//! ```
//!
//! `length` counts source, destination, command, and payload bytes
//! (payload size + 3), so a complete frame is always `length + 3` bytes.
//!
//! # Example
//!
//! ```rust
//! use auxbus_packet::{Endpoint, Opcode, Packet};
//!
//! let packet = Packet::new(Endpoint::App, Endpoint::Focuser, Opcode::McGetPosition, vec![]);
//! let frame = packet.encode();
//! assert_eq!(frame, [0x3B, 0x03, 0x20, 0x12, 0x01, 0xCA]);
//!
//! let decoded = Packet::decode(&frame).unwrap();
//! assert_eq!(decoded, packet);
//! ```

mod constants;
mod endpoint;
mod error;
mod hexdump;
mod opcode;
mod packet;

pub use constants::*;
pub use endpoint::*;
pub use error::*;
pub use hexdump::*;
pub use opcode::*;
pub use packet::*;
