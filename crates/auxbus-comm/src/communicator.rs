//! Send/receive/retry orchestration.
//!
//! [`Communicator`] performs one logical command exchange at a time: send
//! a frame, pull the matching reply out of the byte stream, retry the
//! whole cycle when the reply is damaged or belongs to someone else. The
//! retry loop is a small explicit state machine so the three distinct
//! outcomes (accept, retry, abort immediately) stay visible in the code.

use bytes::{BufMut, BytesMut};

use auxbus_packet::{hex_dump, Endpoint, Opcode, Packet, AUX_HEADER};

use crate::error::ExchangeError;
use crate::transport::Transport;

/// Full send+receive attempts per exchange.
pub const MAX_ATTEMPTS: u32 = 3;

/// One side of the bus, identified by a fixed source endpoint.
///
/// Holds the per-instance device tag used in log lines; each communicator
/// owns its own tag, there is no shared state between instances.
#[derive(Debug, Clone)]
pub struct Communicator {
    source: Endpoint,
    device: String,
}

/// Where a single exchange currently stands.
enum ExchangeState {
    /// Writing the command frame.
    Sending,
    /// Waiting for a reply frame to arrive and validate.
    AwaitingReply,
    /// Reply accepted; carries the reply payload.
    Accepted(Vec<u8>),
    /// Something recoverable went wrong; costs one attempt.
    RetryableFailure(ExchangeError),
    /// Something fatal went wrong; the exchange is over.
    FatalFailure(ExchangeError),
}

impl Communicator {
    /// Create a communicator identifying itself as the controlling
    /// application, tagged with `device` in log output.
    pub fn new(device: impl Into<String>) -> Self {
        Communicator {
            source: Endpoint::App,
            device: device.into(),
        }
    }

    /// Create a communicator with an explicit source endpoint.
    pub fn with_source(device: impl Into<String>, source: Endpoint) -> Self {
        Communicator {
            source,
            device: device.into(),
        }
    }

    /// The endpoint this communicator sends from, and the address replies
    /// must be directed back to.
    pub fn source(&self) -> Endpoint {
        self.source
    }

    /// Encode and write one command frame. Stale input is flushed first
    /// so a late reply to an earlier command cannot be picked up by this
    /// exchange. Write failures are fatal for the calling exchange.
    pub fn send_packet<T: Transport>(
        &self,
        transport: &mut T,
        destination: Endpoint,
        command: Opcode,
        payload: &[u8],
    ) -> Result<(), ExchangeError> {
        let packet = Packet::new(self.source, destination, command, payload.to_vec());
        let frame = packet.encode();

        transport.flush_input().map_err(ExchangeError::Write)?;
        if let Err(err) = transport.write_all(&frame) {
            log::error!("[{}] send failed: {}", self.device, err);
            return Err(ExchangeError::Write(err));
        }
        log::debug!("[{}] TX <{}>", self.device, hex_dump(&frame));
        Ok(())
    }

    /// Scan the stream for the next frame and decode it.
    ///
    /// Three stages: skip bytes until the header sentinel appears, read
    /// the length byte, then read the remaining `length + 1` bytes. A
    /// read error while still scanning for the header is reported as
    /// [`ExchangeError::Read`]; once the header has been seen, a read
    /// error means the frame was cut off and is reported as
    /// [`ExchangeError::TruncatedReply`].
    pub fn read_packet<T: Transport>(&self, transport: &mut T) -> Result<Packet, ExchangeError> {
        let mut byte = [0u8; 1];
        loop {
            transport.read_exact(&mut byte).map_err(|err| {
                log::error!("[{}] header scan failed: {}", self.device, err);
                ExchangeError::Read(err)
            })?;
            if byte[0] == AUX_HEADER {
                break;
            }
        }

        transport
            .read_exact(&mut byte)
            .map_err(ExchangeError::TruncatedReply)?;
        let length = byte[0] as usize;

        let mut frame = BytesMut::with_capacity(length + 3);
        frame.put_u8(AUX_HEADER);
        frame.put_u8(length as u8);
        frame.resize(length + 3, 0);
        transport
            .read_exact(&mut frame[2..])
            .map_err(ExchangeError::TruncatedReply)?;

        log::debug!("[{}] RX <{}>", self.device, hex_dump(&frame));
        Ok(Packet::decode(&frame)?)
    }

    /// Perform one full exchange: send the command, await a validated
    /// reply addressed back to us, return its payload.
    ///
    /// Damaged, truncated, or misdirected replies cost one attempt each,
    /// up to [`MAX_ATTEMPTS`]; write failures and header-scan read
    /// failures abort immediately. Either the accepted reply payload is
    /// returned or the exchange fails as a whole.
    pub fn send_command<T: Transport>(
        &self,
        transport: &mut T,
        destination: Endpoint,
        command: Opcode,
        payload: &[u8],
    ) -> Result<Vec<u8>, ExchangeError> {
        let mut attempts = 0u32;
        let mut state = ExchangeState::Sending;

        loop {
            state = match state {
                ExchangeState::Sending => {
                    match self.send_packet(transport, destination, command, payload) {
                        Ok(()) => ExchangeState::AwaitingReply,
                        Err(err) => ExchangeState::FatalFailure(err),
                    }
                }
                ExchangeState::AwaitingReply => match self.read_packet(transport) {
                    Ok(reply) => self.screen_reply(reply, destination, command),
                    Err(err @ ExchangeError::Read(_)) => ExchangeState::FatalFailure(err),
                    Err(err) => ExchangeState::RetryableFailure(err),
                },
                ExchangeState::RetryableFailure(err) => {
                    attempts += 1;
                    if attempts >= MAX_ATTEMPTS {
                        log::error!(
                            "[{}] giving up on {:?} after {} attempts: {}",
                            self.device,
                            command,
                            attempts,
                            err
                        );
                        return Err(ExchangeError::Exhausted { attempts });
                    }
                    log::debug!(
                        "[{}] attempt {} failed ({}), retrying",
                        self.device,
                        attempts,
                        err
                    );
                    ExchangeState::Sending
                }
                ExchangeState::Accepted(reply_payload) => return Ok(reply_payload),
                ExchangeState::FatalFailure(err) => return Err(err),
            };
        }
    }

    /// Reply-only exchange: send the command with an empty payload and
    /// return the reply payload.
    pub fn query<T: Transport>(
        &self,
        transport: &mut T,
        destination: Endpoint,
        command: Opcode,
    ) -> Result<Vec<u8>, ExchangeError> {
        self.send_command(transport, destination, command, &[])
    }

    /// Fire-and-forget exchange: the reply frame is still awaited and
    /// validated, but its payload is discarded.
    pub fn command_blind<T: Transport>(
        &self,
        transport: &mut T,
        destination: Endpoint,
        command: Opcode,
        payload: &[u8],
    ) -> Result<(), ExchangeError> {
        self.send_command(transport, destination, command, payload)
            .map(|_| ())
    }

    /// Decide whether a well-formed reply belongs to this exchange: it
    /// must carry the command we sent, be addressed back to us, and
    /// originate from the endpoint we addressed.
    fn screen_reply(
        &self,
        reply: Packet,
        destination: Endpoint,
        command: Opcode,
    ) -> ExchangeState {
        if reply.command != command
            || reply.destination != self.source
            || reply.source != destination
        {
            log::error!(
                "[{}] misdirected reply: got {:?} from {:?} to {:?}, wanted {:?} from {:?} to {:?}",
                self.device,
                reply.command,
                reply.source,
                reply.destination,
                command,
                destination,
                self.source
            );
            return ExchangeState::RetryableFailure(ExchangeError::MisdirectedReply {
                command: reply.command,
                source: reply.source,
                destination: reply.destination,
            });
        }
        ExchangeState::Accepted(reply.payload)
    }
}
