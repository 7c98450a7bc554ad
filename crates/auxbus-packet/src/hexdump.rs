//! Hex formatting for frame log lines.

/// Maximum number of bytes rendered per dump; longer buffers are truncated.
pub const HEX_DUMP_LIMIT: usize = 100;

/// Render a buffer as space-separated uppercase hex (`"3B 03 20 12 01 CA"`).
///
/// Returns a fresh `String` per call, so concurrent callers never share a
/// formatting buffer.
pub fn hex_dump(data: &[u8]) -> String {
    data.iter()
        .take(HEX_DUMP_LIMIT)
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
