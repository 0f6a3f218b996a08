//! Wire-level encoding kernel
//!
//! This module provides the hand-written core under the constructor
//! catalogue: the primitive codec adapter, derived presence masks, and
//! collection framing.

mod error;
mod flags;
mod stream;
mod vector;

pub use error::{Error, MAX_BYTES_LEN, Result};
pub use flags::Flags;
pub use stream::OutputStream;
pub use vector::{
    write_bytes_vector, write_int_vector, write_long_vector, write_string_vector, write_vector,
};

use bytes::Bytes;

/// Collection-type marker preceding every encoded vector.
pub const VECTOR_MAGIC: u32 = 0x1CB5_C415;

/// Reserved magic encoding boolean `true`.
pub const BOOL_TRUE_MAGIC: u32 = 0x9972_75B5;

/// Reserved magic encoding boolean `false`.
pub const BOOL_FALSE_MAGIC: u32 = 0xBC79_9737;

/// A value that can append its wire representation to an [`OutputStream`].
///
/// Implementations write the constructor magic first, then the flags word iff
/// the constructor declares optional content, then every field in declared
/// order. Field order is part of the wire contract and must never be changed
/// for convenience; decoders consume positionally.
pub trait SerializeToStream {
    /// Append the wire representation of `self` to `out`.
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()>;
}

/// Encode a single value into a frozen buffer.
pub fn encode<T: SerializeToStream>(value: &T) -> Result<Bytes> {
    let mut out = OutputStream::new();
    value.serialize_to(&mut out)?;
    tracing::trace!(len = out.len(), "encoded value");
    Ok(out.freeze())
}
