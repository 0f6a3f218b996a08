//! Dialogs, preserved across protocol layers
//!
//! Two frozen constructors represent the same logical dialog at different
//! protocol revisions. They share nothing on the wire: each has its own magic
//! and field list, and neither is ever migrated into the other. Callers pick
//! the constructor matching the negotiated layer at construction time.

use crate::wire::{Flags, OutputStream, Result, SerializeToStream};

use super::Peer;

/// `dialog` at the original layer.
///
/// The pinned marker was still an explicit wire boolean here; later layers
/// folded it into the flags word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogV1 {
    /// Peer this dialog is with
    pub peer: Peer,
    /// Identifier of the newest message
    pub top_message: i32,
    /// Unread message count
    pub unread_count: i32,
    /// Pinned marker, encoded as a wire boolean
    pub pinned: bool,
}

impl DialogV1 {
    /// Constructor magic
    pub const MAGIC: u32 = 0x15EB_7A92;
}

impl SerializeToStream for DialogV1 {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        self.peer.serialize_to(out)?;
        out.write_i32(self.top_message);
        out.write_i32(self.unread_count);
        out.write_bool(self.pinned);
        Ok(())
    }
}

/// `dialog` at the current layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogV2 {
    /// Pinned marker (flags bit 2, no field bytes)
    pub pinned: bool,
    /// Peer this dialog is with
    pub peer: Peer,
    /// Identifier of the newest message
    pub top_message: i32,
    /// Unread message count
    pub unread_count: i32,
    /// Unsent draft text (flags bit 1)
    pub draft: Option<String>,
    /// Folder assignment (flags bit 4)
    pub folder_id: Option<i32>,
}

impl DialogV2 {
    /// Constructor magic
    pub const MAGIC: u32 = 0xA8E3_0C57;

    /// Flags bit for [`Self::draft`].
    pub const DRAFT_BIT: u32 = 1;
    /// Flags bit for [`Self::pinned`].
    pub const PINNED_BIT: u32 = 2;
    /// Flags bit for [`Self::folder_id`].
    pub const FOLDER_BIT: u32 = 4;

    /// Presence mask derived from the optional fields and boolean flags.
    #[must_use]
    pub fn flags(&self) -> Flags {
        Flags::new()
            .opt(Self::DRAFT_BIT, &self.draft)
            .bit(Self::PINNED_BIT, self.pinned)
            .opt(Self::FOLDER_BIT, &self.folder_id)
    }
}

impl SerializeToStream for DialogV2 {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_u32(self.flags().as_u32());
        self.peer.serialize_to(out)?;
        out.write_i32(self.top_message);
        out.write_i32(self.unread_count);
        if let Some(draft) = &self.draft {
            out.write_string(draft)?;
        }
        if let Some(folder_id) = self.folder_id {
            out.write_i32(folder_id);
        }
        Ok(())
    }
}

/// The `Dialog` abstract type across layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialog {
    /// Original layout
    V1(DialogV1),
    /// Current layout
    V2(DialogV2),
}

impl Dialog {
    /// Magic of the active constructor.
    #[must_use]
    pub const fn magic(&self) -> u32 {
        match self {
            Self::V1(_) => DialogV1::MAGIC,
            Self::V2(_) => DialogV2::MAGIC,
        }
    }
}

impl SerializeToStream for Dialog {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        match self {
            Self::V1(c) => c.serialize_to(out),
            Self::V2(c) => c.serialize_to(out),
        }
    }
}
