//! Exchange error types.

use auxbus_packet::{Endpoint, FrameError, Opcode};
use std::error::Error;
use std::fmt;
use std::io;

/// Errors that can occur while driving an exchange against a transport.
//
// Implemented by hand rather than via `#[derive(thiserror::Error)]`:
// thiserror unconditionally treats a field named `source` as the error
// source, but `MisdirectedReply::source` is an `Endpoint` (the replying
// endpoint), not a nested error.
#[derive(Debug)]
pub enum ExchangeError {
    /// Transport write failed. Never retried: a dead write path is not
    /// transient.
    Write(io::Error),

    /// Transport read failed while scanning for a frame header. Never
    /// retried: the device is not talking at all.
    Read(io::Error),

    /// Transport read failed after the frame header was already seen.
    /// The reply was cut off mid-frame; retrying the exchange is worth it.
    TruncatedReply(io::Error),

    /// The reply frame failed structural or checksum validation.
    Frame(FrameError),

    /// A well-formed reply that does not belong to this exchange: wrong
    /// command, not addressed to us, or not from the endpoint we asked.
    MisdirectedReply {
        /// Command carried by the reply.
        command: Opcode,
        /// Endpoint the reply came from.
        source: Endpoint,
        /// Endpoint the reply is addressed to.
        destination: Endpoint,
    },

    /// All retry attempts consumed without an accepted reply.
    Exhausted {
        /// Number of full send+receive attempts performed.
        attempts: u32,
    },
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write(e) => write!(f, "transport write failed: {e}"),
            Self::Read(e) => write!(f, "transport read failed: {e}"),
            Self::TruncatedReply(e) => write!(f, "reply truncated mid-frame: {e}"),
            Self::Frame(e) => fmt::Display::fmt(e, f),
            Self::MisdirectedReply {
                command,
                source,
                destination,
            } => write!(
                f,
                "misdirected reply: command {command:?} from {source:?} to {destination:?}"
            ),
            Self::Exhausted { attempts } => {
                write!(f, "exchange failed after {attempts} attempts")
            }
        }
    }
}

impl Error for ExchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Write(e) | Self::Read(e) | Self::TruncatedReply(e) => Some(e),
            Self::Frame(e) => e.source(),
            Self::MisdirectedReply { .. } | Self::Exhausted { .. } => None,
        }
    }
}

impl From<FrameError> for ExchangeError {
    fn from(source: FrameError) -> Self {
        Self::Frame(source)
    }
}
