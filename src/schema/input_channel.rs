//! Channel input references

use crate::wire::{OutputStream, Result, SerializeToStream};

/// `inputChannelEmpty` — the absent channel reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputChannelEmpty;

impl InputChannelEmpty {
    /// Constructor magic
    pub const MAGIC: u32 = 0xEE80_1C14;
}

impl SerializeToStream for InputChannelEmpty {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        Ok(())
    }
}

/// `inputChannel` — a channel addressed by id and access hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputChannelRef {
    /// Channel identifier
    pub channel_id: i64,
    /// Access hash proving the caller may address this channel
    pub access_hash: i64,
}

impl InputChannelRef {
    /// Constructor magic
    pub const MAGIC: u32 = 0xF51A_2C3B;
}

impl SerializeToStream for InputChannelRef {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_i64(self.channel_id);
        out.write_i64(self.access_hash);
        Ok(())
    }
}

/// The `InputChannel` abstract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputChannel {
    /// No channel
    Empty(InputChannelEmpty),
    /// A concrete channel reference
    Channel(InputChannelRef),
}

impl InputChannel {
    /// Magic of the active constructor.
    #[must_use]
    pub const fn magic(&self) -> u32 {
        match self {
            Self::Empty(_) => InputChannelEmpty::MAGIC,
            Self::Channel(_) => InputChannelRef::MAGIC,
        }
    }
}

impl SerializeToStream for InputChannel {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        match self {
            Self::Empty(c) => c.serialize_to(out),
            Self::Channel(c) => c.serialize_to(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_long_layout() {
        let channel = InputChannelRef {
            channel_id: 1001,
            access_hash: 777,
        };

        let mut out = OutputStream::new();
        channel.serialize_to(&mut out).unwrap();

        let bytes = out.as_slice();
        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[0..4], InputChannelRef::MAGIC.to_le_bytes());
        assert_eq!(&bytes[4..12], 1001i64.to_le_bytes());
        assert_eq!(&bytes[12..20], 777i64.to_le_bytes());
    }

    #[test]
    fn test_empty_constructor_is_bare_magic() {
        let mut out = OutputStream::new();
        InputChannelEmpty.serialize_to(&mut out).unwrap();
        assert_eq!(out.as_slice(), InputChannelEmpty::MAGIC.to_le_bytes());
    }
}
