//! Peer references
//!
//! The simplest abstract type in the catalogue: three flagless constructors
//! that serialize interchangeably wherever a peer is expected.

use crate::wire::{OutputStream, Result, SerializeToStream};

/// `peerUser` — a reference to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerUser {
    /// User identifier
    pub user_id: i64,
}

impl PeerUser {
    /// Constructor magic
    pub const MAGIC: u32 = 0x7D2C_1A45;
}

impl SerializeToStream for PeerUser {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_i64(self.user_id);
        Ok(())
    }
}

/// `peerChat` — a reference to a basic group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerChat {
    /// Group identifier
    pub chat_id: i64,
}

impl PeerChat {
    /// Constructor magic
    pub const MAGIC: u32 = 0x3A1C_88F6;
}

impl SerializeToStream for PeerChat {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_i64(self.chat_id);
        Ok(())
    }
}

/// `peerChannel` — a reference to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerChannel {
    /// Channel identifier
    pub channel_id: i64,
}

impl PeerChannel {
    /// Constructor magic
    pub const MAGIC: u32 = 0xC60B_95D1;
}

impl SerializeToStream for PeerChannel {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_i64(self.channel_id);
        Ok(())
    }
}

/// The `Peer` abstract type.
///
/// The set of constructors is closed; dispatch is an exhaustive match, so a
/// missing case is a compile error rather than a silently dropped record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Peer {
    /// A user
    User(PeerUser),
    /// A basic group
    Chat(PeerChat),
    /// A channel
    Channel(PeerChannel),
}

impl Peer {
    /// Magic of the active constructor.
    #[must_use]
    pub const fn magic(&self) -> u32 {
        match self {
            Self::User(_) => PeerUser::MAGIC,
            Self::Chat(_) => PeerChat::MAGIC,
            Self::Channel(_) => PeerChannel::MAGIC,
        }
    }
}

impl SerializeToStream for Peer {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        match self {
            Self::User(c) => c.serialize_to(out),
            Self::Chat(c) => c.serialize_to(out),
            Self::Channel(c) => c.serialize_to(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_writes_constructor_magic() {
        let peer = Peer::Channel(PeerChannel { channel_id: 42 });

        let mut out = OutputStream::new();
        peer.serialize_to(&mut out).unwrap();

        assert_eq!(&out.as_slice()[0..4], PeerChannel::MAGIC.to_le_bytes());
        assert_eq!(&out.as_slice()[4..12], 42i64.to_le_bytes());
        assert_eq!(peer.magic(), PeerChannel::MAGIC);
    }

    #[test]
    fn test_flagless_constructor_has_no_flags_word() {
        let mut out = OutputStream::new();
        PeerUser { user_id: 7 }.serialize_to(&mut out).unwrap();

        // magic + one i64, nothing else
        assert_eq!(out.len(), 12);
    }
}
