//! Byte-stream transport abstraction.

use std::io;

/// A blocking, exclusively owned byte-stream handle.
///
/// Implementations are expected to enforce their own short read timeout
/// (on the order of seconds); this layer never waits on anything else.
/// The handle is externally owned and not reentrant: one exchange at a
/// time per transport.
pub trait Transport {
    /// Write the whole buffer to the stream.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Read exactly `buf.len()` bytes, blocking up to the transport's
    /// timeout. Partial reads at timeout are an error.
    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()>;

    /// Discard any stale bytes sitting in the input buffer. Invoked
    /// before each send so a late reply to an earlier command is not
    /// mistaken for the next one.
    fn flush_input(&mut self) -> io::Result<()>;
}
