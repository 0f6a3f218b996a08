//! Collection framing
//!
//! Every collection encodes as the fixed vector marker, a little-endian u32
//! element count, then the elements in order with no separators. The marker is
//! identical for all element types; the element encoding rule comes from the
//! element itself.

use super::{Error, OutputStream, Result, SerializeToStream, VECTOR_MAGIC};

fn write_header(out: &mut OutputStream, len: usize) -> Result<()> {
    let count = u32::try_from(len).map_err(|_| Error::VectorTooLong {
        len,
        max: u32::MAX,
    })?;
    out.write_u32(VECTOR_MAGIC);
    out.write_u32(count);
    Ok(())
}

/// Write a vector of sub-records, each through its own encoder.
pub fn write_vector<T: SerializeToStream>(out: &mut OutputStream, items: &[T]) -> Result<()> {
    write_header(out, items.len())?;
    for item in items {
        item.serialize_to(out)?;
    }
    Ok(())
}

/// Write a vector of 32-bit integers.
pub fn write_int_vector(out: &mut OutputStream, items: &[i32]) -> Result<()> {
    write_header(out, items.len())?;
    for item in items {
        out.write_i32(*item);
    }
    Ok(())
}

/// Write a vector of 64-bit integers.
pub fn write_long_vector(out: &mut OutputStream, items: &[i64]) -> Result<()> {
    write_header(out, items.len())?;
    for item in items {
        out.write_i64(*item);
    }
    Ok(())
}

/// Write a vector of strings, each with byte-string framing.
pub fn write_string_vector<S: AsRef<str>>(out: &mut OutputStream, items: &[S]) -> Result<()> {
    write_header(out, items.len())?;
    for item in items {
        out.write_string(item.as_ref())?;
    }
    Ok(())
}

/// Write a vector of byte arrays, each with byte-string framing.
pub fn write_bytes_vector<B: AsRef<[u8]>>(out: &mut OutputStream, items: &[B]) -> Result<()> {
    write_header(out, items.len())?;
    for item in items {
        out.write_bytes(item.as_ref())?;
    }
    Ok(())
}
