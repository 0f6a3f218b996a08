//! Wire encoding errors

use thiserror::Error;

/// Maximum byte-string length expressible by the long length form (3 bytes).
pub const MAX_BYTES_LEN: usize = (1 << 24) - 1;

/// Errors raised while encoding a value to the wire.
///
/// Encoding is total over well-formed values; the only failures are
/// representational limits of the framing itself.
#[derive(Error, Debug)]
pub enum Error {
    /// Byte string longer than the long length form can express
    #[error("byte string too long: {len} bytes (max {max})")]
    BytesTooLong {
        /// Actual length
        len: usize,
        /// Maximum encodable length
        max: usize,
    },

    /// Collection with more elements than the count word can express
    #[error("vector too long: {len} elements (max {max})")]
    VectorTooLong {
        /// Actual element count
        len: usize,
        /// Maximum encodable count
        max: u32,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
