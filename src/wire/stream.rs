//! Primitive codec adapter
//!
//! [`OutputStream`] owns the growable buffer for one in-flight encode call and
//! writes the bare wire representation of each primitive: fixed-width
//! little-endian integers, 8-byte IEEE-754 doubles, magic-encoded booleans,
//! and length-prefixed byte strings padded to a 4-byte boundary.

use bytes::{BufMut, Bytes, BytesMut};

use super::{BOOL_FALSE_MAGIC, BOOL_TRUE_MAGIC, Error, MAX_BYTES_LEN, Result};

/// Marker byte introducing the long length form of a byte string.
const LONG_LEN_MARKER: u8 = 0xFE;

/// Growable output sink, exclusively owned by a single encode call.
#[derive(Debug, Default)]
pub struct OutputStream {
    buf: BytesMut,
}

impl OutputStream {
    /// Create an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stream with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Write a 32-bit unsigned integer (little-endian).
    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    /// Write a 32-bit signed integer (little-endian).
    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    /// Write a 64-bit signed integer (little-endian).
    pub fn write_i64(&mut self, value: i64) {
        self.buf.put_i64_le(value);
    }

    /// Write an IEEE-754 double (little-endian).
    pub fn write_f64(&mut self, value: f64) {
        self.buf.put_f64_le(value);
    }

    /// Write a boolean as its reserved magic.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(if value {
            BOOL_TRUE_MAGIC
        } else {
            BOOL_FALSE_MAGIC
        });
    }

    /// Append raw bytes with no framing.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Write a length-prefixed byte string, zero-padded to a 4-byte boundary.
    ///
    /// Lengths below 254 use a single length byte; longer strings use the
    /// `0xFE` marker followed by a 3-byte little-endian length. The padding
    /// covers the prefix plus the payload, so the framed unit is always a
    /// multiple of 4 bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let len = bytes.len();
        let prefix = if len < 254 {
            self.buf.put_u8(len as u8);
            1
        } else {
            if len > MAX_BYTES_LEN {
                return Err(Error::BytesTooLong {
                    len,
                    max: MAX_BYTES_LEN,
                });
            }
            self.buf.put_u8(LONG_LEN_MARKER);
            self.buf.put_u8((len & 0xFF) as u8);
            self.buf.put_u8(((len >> 8) & 0xFF) as u8);
            self.buf.put_u8(((len >> 16) & 0xFF) as u8);
            4
        };

        self.buf.put_slice(bytes);

        let padding = (4 - (prefix + len) % 4) % 4;
        for _ in 0..padding {
            self.buf.put_u8(0);
        }

        Ok(())
    }

    /// Write a UTF-8 string with byte-string framing.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Freeze the stream into an immutable buffer.
    #[must_use]
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_little_endian() {
        let mut out = OutputStream::new();
        out.write_u32(0x1122_3344);
        out.write_i32(-1);
        out.write_i64(0x0102_0304_0506_0708);

        assert_eq!(
            out.as_slice(),
            [
                0x44, 0x33, 0x22, 0x11, // u32
                0xFF, 0xFF, 0xFF, 0xFF, // i32 -1
                0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, // i64
            ]
        );
    }

    #[test]
    fn test_double_little_endian() {
        let mut out = OutputStream::new();
        out.write_f64(1.5);
        assert_eq!(out.as_slice(), 1.5f64.to_le_bytes());
    }

    #[test]
    fn test_bool_magics() {
        let mut out = OutputStream::new();
        out.write_bool(true);
        out.write_bool(false);

        let mut expected = Vec::new();
        expected.extend_from_slice(&BOOL_TRUE_MAGIC.to_le_bytes());
        expected.extend_from_slice(&BOOL_FALSE_MAGIC.to_le_bytes());
        assert_eq!(out.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_short_bytes_padding() {
        // 1 prefix byte + 3 payload bytes fills a 4-byte unit exactly
        let mut out = OutputStream::new();
        out.write_bytes(b"abc").unwrap();
        assert_eq!(out.as_slice(), [3, b'a', b'b', b'c']);

        // 1 + 1 needs 2 padding bytes
        let mut out = OutputStream::new();
        out.write_bytes(b"x").unwrap();
        assert_eq!(out.as_slice(), [1, b'x', 0, 0]);

        // empty string is a lone length byte plus 3 padding bytes
        let mut out = OutputStream::new();
        out.write_bytes(b"").unwrap();
        assert_eq!(out.as_slice(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_long_bytes_framing() {
        let payload = vec![0xAB; 254];
        let mut out = OutputStream::new();
        out.write_bytes(&payload).unwrap();

        assert_eq!(out.as_slice()[0], 0xFE);
        assert_eq!(&out.as_slice()[1..4], [254, 0, 0]);
        assert_eq!(&out.as_slice()[4..258], payload.as_slice());
        // 4 + 254 = 258, padded to 260
        assert_eq!(out.len(), 260);
        assert_eq!(&out.as_slice()[258..], [0, 0]);
    }

    #[test]
    fn test_boundary_stays_short_form() {
        let payload = vec![0u8; 253];
        let mut out = OutputStream::new();
        out.write_bytes(&payload).unwrap();
        assert_eq!(out.as_slice()[0], 253);
        // 1 + 253 = 254, padded to 256
        assert_eq!(out.len(), 256);
    }

    #[test]
    fn test_oversized_bytes_rejected() {
        let payload = vec![0u8; MAX_BYTES_LEN + 1];
        let mut out = OutputStream::new();
        let result = out.write_bytes(&payload);
        assert!(matches!(result, Err(Error::BytesTooLong { .. })));
    }
}
