//! Integration tests for the exchange layer.
//!
//! These drive a [`Communicator`] against an in-memory mock transport
//! with a scripted receive stream, standing in for the real serial port.

use std::collections::VecDeque;
use std::io;

use auxbus_comm::{Communicator, ExchangeError, Transport};
use auxbus_packet::{Endpoint, Opcode, Packet};

/// In-memory transport: replies are preloaded into `rx`, every write is
/// recorded, and running out of scripted bytes behaves like the serial
/// read timeout.
#[derive(Default)]
struct MockTransport {
    rx: VecDeque<u8>,
    tx: Vec<Vec<u8>>,
    write_attempts: usize,
    reads: usize,
    flushes: usize,
    fail_writes: bool,
}

impl MockTransport {
    fn new() -> Self {
        MockTransport::default()
    }

    fn preload(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }
}

impl Transport for MockTransport {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.write_attempts += 1;
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "port gone"));
        }
        self.tx.push(data.to_vec());
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.reads += 1;
        if self.rx.len() < buf.len() {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "read timeout"));
        }
        for byte in buf.iter_mut() {
            *byte = self.rx.pop_front().unwrap();
        }
        Ok(())
    }

    fn flush_input(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

fn reply_frame(source: Endpoint, destination: Endpoint, command: Opcode, payload: &[u8]) -> Vec<u8> {
    Packet::new(source, destination, command, payload.to_vec()).encode()
}

#[test]
fn test_first_valid_reply_accepted() {
    let comm = Communicator::new("focuser");
    let mut transport = MockTransport::new();
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::App,
        Opcode::McGetPosition,
        &[0x00, 0x01, 0x02],
    ));

    let reply = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::McGetPosition)
        .unwrap();

    assert_eq!(reply, vec![0x00, 0x01, 0x02]);
    assert_eq!(transport.tx.len(), 1);
    // The request frame on the wire: App -> Focuser, MC_GET_POSITION.
    assert_eq!(transport.tx[0], [0x3B, 0x03, 0x20, 0x12, 0x01, 0xCA]);
}

#[test]
fn test_input_flushed_before_each_send() {
    let comm = Communicator::new("focuser");
    let mut transport = MockTransport::new();
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::App,
        Opcode::McSlewDone,
        &[0xFF],
    ));

    comm.query(&mut transport, Endpoint::Focuser, Opcode::McSlewDone)
        .unwrap();

    assert_eq!(transport.flushes, 1);
}

#[test]
fn test_leading_garbage_skipped() {
    let comm = Communicator::new("focuser");
    let mut transport = MockTransport::new();
    // Line noise before the frame, including a byte equal to the length
    // field of a frame.
    transport.preload(&[0x00, 0xFF, 0x13]);
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::App,
        Opcode::GetVersion,
        &[7, 2],
    ));

    let reply = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::GetVersion)
        .unwrap();

    assert_eq!(reply, vec![7, 2]);
    assert_eq!(transport.tx.len(), 1);
}

#[test]
fn test_three_misdirected_replies_exhaust_exchange() {
    let comm = Communicator::new("focuser");
    let mut transport = MockTransport::new();
    // Three well-formed replies carrying the wrong command.
    for _ in 0..3 {
        transport.preload(&reply_frame(
            Endpoint::Focuser,
            Endpoint::App,
            Opcode::McGotoFast,
            &[],
        ));
    }

    let err = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::McGetPosition)
        .unwrap_err();

    assert!(matches!(err, ExchangeError::Exhausted { attempts: 3 }));
    assert_eq!(transport.tx.len(), 3);
}

#[test]
fn test_reply_from_wrong_endpoint_retried() {
    let comm = Communicator::new("mount");
    let mut transport = MockTransport::new();
    // First reply originates from the wrong motor, second is the real one.
    transport.preload(&reply_frame(
        Endpoint::AltMotor,
        Endpoint::App,
        Opcode::McGetPosition,
        &[0x11],
    ));
    transport.preload(&reply_frame(
        Endpoint::AzmMotor,
        Endpoint::App,
        Opcode::McGetPosition,
        &[0x22],
    ));

    let reply = comm
        .query(&mut transport, Endpoint::AzmMotor, Opcode::McGetPosition)
        .unwrap();

    assert_eq!(reply, vec![0x22]);
    assert_eq!(transport.tx.len(), 2);
}

#[test]
fn test_reply_addressed_elsewhere_retried() {
    let comm = Communicator::new("mount");
    let mut transport = MockTransport::new();
    // Addressed to the hand controller, not to us.
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::HandController,
        Opcode::McGetPosition,
        &[0x33],
    ));
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::App,
        Opcode::McGetPosition,
        &[0x44],
    ));

    let reply = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::McGetPosition)
        .unwrap();

    assert_eq!(reply, vec![0x44]);
    assert_eq!(transport.tx.len(), 2);
}

#[test]
fn test_checksum_mismatch_retried() {
    let comm = Communicator::new("focuser");
    let mut transport = MockTransport::new();
    let mut damaged = reply_frame(Endpoint::Focuser, Endpoint::App, Opcode::McGetPosition, &[0x55]);
    let last = damaged.len() - 1;
    damaged[last] ^= 0x01;
    transport.preload(&damaged);
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::App,
        Opcode::McGetPosition,
        &[0x55],
    ));

    let reply = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::McGetPosition)
        .unwrap();

    assert_eq!(reply, vec![0x55]);
    assert_eq!(transport.tx.len(), 2);
}

#[test]
fn test_write_failure_is_immediately_fatal() {
    let comm = Communicator::new("focuser");
    let mut transport = MockTransport::new();
    transport.fail_writes = true;

    let err = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::McGetPosition)
        .unwrap_err();

    assert!(matches!(err, ExchangeError::Write(_)));
    assert_eq!(transport.write_attempts, 1);
    assert_eq!(transport.reads, 0);
}

#[test]
fn test_header_scan_timeout_is_fatal() {
    let comm = Communicator::new("focuser");
    // Nothing scripted: the device never answers.
    let mut transport = MockTransport::new();

    let err = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::McGetPosition)
        .unwrap_err();

    assert!(matches!(err, ExchangeError::Read(_)));
    assert_eq!(transport.tx.len(), 1);
}

#[test]
fn test_truncated_reply_costs_an_attempt() {
    let comm = Communicator::new("focuser");
    let mut transport = MockTransport::new();
    // Header and length arrive, then the line goes quiet mid-frame. The
    // second attempt scans the two stale body bytes, finds no header, and
    // times out, which is fatal.
    transport.preload(&[0x3B, 0x05, 0xAA, 0xBB]);

    let err = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::McGetPosition)
        .unwrap_err();

    assert!(matches!(err, ExchangeError::Read(_)));
    assert_eq!(transport.tx.len(), 2);
}

#[test]
fn test_command_blind_validates_reply() {
    let comm = Communicator::new("focuser");
    let mut transport = MockTransport::new();
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::App,
        Opcode::McGotoFast,
        &[],
    ));

    comm.command_blind(
        &mut transport,
        Endpoint::Focuser,
        Opcode::McGotoFast,
        &[0x01, 0x86, 0xA0],
    )
    .unwrap();

    assert_eq!(transport.tx.len(), 1);
    // Payload travels on the outgoing frame even though the reply payload
    // is discarded.
    assert_eq!(&transport.tx[0][5..8], &[0x01, 0x86, 0xA0]);
}

#[test]
fn test_non_default_source_validates_replies_against_itself() {
    let comm = Communicator::with_source("remote", Endpoint::NexRemote);
    let mut transport = MockTransport::new();
    // A reply addressed to App must be rejected; one addressed to
    // NexRemote accepted.
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::App,
        Opcode::McGetPosition,
        &[0x01],
    ));
    transport.preload(&reply_frame(
        Endpoint::Focuser,
        Endpoint::NexRemote,
        Opcode::McGetPosition,
        &[0x02],
    ));

    let reply = comm
        .query(&mut transport, Endpoint::Focuser, Opcode::McGetPosition)
        .unwrap();

    assert_eq!(reply, vec![0x02]);
    assert_eq!(transport.tx.len(), 2);
    // Outgoing frames carry the configured source address.
    assert_eq!(transport.tx[0][2], 0x22);
}
