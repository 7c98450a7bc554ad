//! AUX Bus Exchange Layer
//!
//! This crate turns the unreliable byte stream of a shared serial bus into
//! a reliable command/response exchange. A [`Communicator`] sends one
//! encoded frame, scans the incoming stream for a reply frame addressed
//! back to it, and retries the whole exchange on transient failures such
//! as line noise, truncated frames, or stale replies left over from a
//! previous command.
//!
//! The physical handle is abstracted behind the [`Transport`] trait: any
//! blocking byte stream with a read timeout (serial port, TCP bridge,
//! in-memory mock) can drive an exchange. Everything here is synchronous
//! and single-threaded; callers serialize exchanges per transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use auxbus_comm::{Communicator, Transport};
//! use auxbus_packet::{Endpoint, Opcode};
//!
//! let comm = Communicator::new("focuser");
//! let position = comm.query(&mut port, Endpoint::Focuser, Opcode::McGetPosition)?;
//! ```

mod communicator;
mod error;
mod transport;

pub use communicator::*;
pub use error::*;
pub use transport::*;
