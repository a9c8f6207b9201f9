use snafu::Snafu;

/// Errors surfaced by the codec.
///
/// In normal operation only [`Error::BufferOverflow`] is ever produced:
/// junk bytes, corrupted frames and unknown cmds are recovered in-band by
/// the parser without reaching the caller. The remaining variants reserve
/// the taxonomy for layers built on top of the codec.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Ring buffer full on push, output buffer too small on serialize, or
    /// an `advance_write` reaching past the writable space.
    #[snafu(display("buffer overflow: needed {needed} bytes, {available} available"))]
    BufferOverflow { needed: usize, available: usize },
    /// Reserved: not enough bytes buffered to complete an operation.
    #[snafu(display("insufficient data"))]
    InsufficientData,
    /// Reserved: no start byte in the scanned data.
    #[snafu(display("no frame header found"))]
    NoFrameHeader,
    /// Reserved: header failed validation.
    #[snafu(display("invalid frame header"))]
    InvalidFrameHeader,
    /// Reserved: checksum mismatch.
    #[snafu(display("crc mismatch"))]
    CrcMismatch,
    /// Reserved: internal consistency failure.
    #[snafu(display("internal error"))]
    InternalError,
    /// Reserved: cmd not registered in the packet set.
    #[snafu(display("invalid cmd"))]
    InvalidCommand,
}
