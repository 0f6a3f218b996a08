//! Messages and formatting entities
//!
//! `MessageData` is the densest constructor in the catalogue: it carries a
//! flags word, boolean flags encoded only in that word, optional scalar and
//! string fields, a multiflag group, a nested constructor, and an optional
//! vector of sub-records.

use crate::wire::{Flags, OutputStream, Result, SerializeToStream, write_vector};

use super::Peer;

/// `messageEmpty` — a deleted or missing message slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEmpty {
    /// Message identifier
    pub id: i32,
}

impl MessageEmpty {
    /// Constructor magic
    pub const MAGIC: u32 = 0x83E2_4D9F;
}

impl SerializeToStream for MessageEmpty {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_i32(self.id);
        Ok(())
    }
}

/// Reply target carried by a message.
///
/// Both fields share a single presence bit: modeling them as one optional
/// composite makes partial presence unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplyTo {
    /// Identifier of the message being replied to
    pub reply_to_msg_id: i32,
    /// Identifier of the thread root
    pub reply_to_top_id: i32,
}

/// `message` — a populated message.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageData {
    /// Outgoing message (flags bit 1, no field bytes)
    pub outgoing: bool,
    /// Mentions the current user (flags bit 4, no field bytes)
    pub mentioned: bool,
    /// Delivered without notification (flags bit 13, no field bytes)
    pub silent: bool,
    /// Message identifier
    pub id: i32,
    /// Sender, absent for anonymous posts (flags bit 8)
    pub from_id: Option<i64>,
    /// Destination peer
    pub peer: Peer,
    /// Reply target (multiflag group, flags bit 3)
    pub reply_to: Option<ReplyTo>,
    /// Unix timestamp
    pub date: i32,
    /// Message body
    pub text: String,
    /// Formatting entities (flags bit 7)
    pub entities: Option<Vec<MessageEntity>>,
    /// View counter (flags bit 10)
    pub views: Option<i32>,
    /// Last edit timestamp (flags bit 15)
    pub edit_date: Option<i32>,
}

impl MessageData {
    /// Constructor magic
    pub const MAGIC: u32 = 0x4D71_B2E0;

    /// Flags bit for [`Self::outgoing`].
    pub const OUT_BIT: u32 = 1;
    /// Flags bit for [`Self::reply_to`].
    pub const REPLY_BIT: u32 = 3;
    /// Flags bit for [`Self::mentioned`].
    pub const MENTIONED_BIT: u32 = 4;
    /// Flags bit for [`Self::entities`].
    pub const ENTITIES_BIT: u32 = 7;
    /// Flags bit for [`Self::from_id`].
    pub const FROM_ID_BIT: u32 = 8;
    /// Flags bit for [`Self::views`].
    pub const VIEWS_BIT: u32 = 10;
    /// Flags bit for [`Self::silent`].
    pub const SILENT_BIT: u32 = 13;
    /// Flags bit for [`Self::edit_date`].
    pub const EDIT_DATE_BIT: u32 = 15;

    /// Presence mask derived from the optional fields and boolean flags.
    #[must_use]
    pub fn flags(&self) -> Flags {
        Flags::new()
            .bit(Self::OUT_BIT, self.outgoing)
            .opt(Self::REPLY_BIT, &self.reply_to)
            .bit(Self::MENTIONED_BIT, self.mentioned)
            .opt(Self::ENTITIES_BIT, &self.entities)
            .opt(Self::FROM_ID_BIT, &self.from_id)
            .opt(Self::VIEWS_BIT, &self.views)
            .bit(Self::SILENT_BIT, self.silent)
            .opt(Self::EDIT_DATE_BIT, &self.edit_date)
    }
}

impl SerializeToStream for MessageData {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_u32(self.flags().as_u32());
        out.write_i32(self.id);
        if let Some(from_id) = self.from_id {
            out.write_i64(from_id);
        }
        self.peer.serialize_to(out)?;
        if let Some(reply) = &self.reply_to {
            out.write_i32(reply.reply_to_msg_id);
            out.write_i32(reply.reply_to_top_id);
        }
        out.write_i32(self.date);
        out.write_string(&self.text)?;
        if let Some(entities) = &self.entities {
            write_vector(out, entities)?;
        }
        if let Some(views) = self.views {
            out.write_i32(views);
        }
        if let Some(edit_date) = self.edit_date {
            out.write_i32(edit_date);
        }
        Ok(())
    }
}

/// The `Message` abstract type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Deleted or missing slot
    Empty(MessageEmpty),
    /// Populated message
    Data(MessageData),
}

impl Message {
    /// Magic of the active constructor.
    #[must_use]
    pub const fn magic(&self) -> u32 {
        match self {
            Self::Empty(_) => MessageEmpty::MAGIC,
            Self::Data(_) => MessageData::MAGIC,
        }
    }
}

impl SerializeToStream for Message {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        match self {
            Self::Empty(c) => c.serialize_to(out),
            Self::Data(c) => c.serialize_to(out),
        }
    }
}

/// `messageEntityBold` — bold span over the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityBold {
    /// Span start, in UTF-16 code units
    pub offset: i32,
    /// Span length
    pub length: i32,
}

impl EntityBold {
    /// Constructor magic
    pub const MAGIC: u32 = 0x6AC1_57D2;
}

impl SerializeToStream for EntityBold {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_i32(self.offset);
        out.write_i32(self.length);
        Ok(())
    }
}

/// `messageEntityTextUrl` — a span linking to a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityTextUrl {
    /// Span start, in UTF-16 code units
    pub offset: i32,
    /// Span length
    pub length: i32,
    /// Link target
    pub url: String,
}

impl EntityTextUrl {
    /// Constructor magic
    pub const MAGIC: u32 = 0x90C8_3EF4;
}

impl SerializeToStream for EntityTextUrl {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_i32(self.offset);
        out.write_i32(self.length);
        out.write_string(&self.url)?;
        Ok(())
    }
}

/// The `MessageEntity` abstract type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageEntity {
    /// Bold span
    Bold(EntityBold),
    /// Linked span
    TextUrl(EntityTextUrl),
}

impl MessageEntity {
    /// Magic of the active constructor.
    #[must_use]
    pub const fn magic(&self) -> u32 {
        match self {
            Self::Bold(_) => EntityBold::MAGIC,
            Self::TextUrl(_) => EntityTextUrl::MAGIC,
        }
    }
}

impl SerializeToStream for MessageEntity {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        match self {
            Self::Bold(c) => c.serialize_to(out),
            Self::TextUrl(c) => c.serialize_to(out),
        }
    }
}
