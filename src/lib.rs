//! tlwire - encoder for a TL-style versioned binary wire protocol
//!
//! This library implements the encode side of a Type-Language-style wire
//! format: abstract types realized by constructors, each identified by a
//! 32-bit magic and an ordered field list, with optional fields folded into a
//! derived flags word and collections framed by a fixed vector marker.
//!
//! # Quick Start
//!
//! ```rust
//! use tlwire::schema::{InputChannel, InputChannelRef};
//! use tlwire::encode;
//!
//! let channel = InputChannel::Channel(InputChannelRef {
//!     channel_id: 1001,
//!     access_hash: 777,
//! });
//!
//! let bytes = encode(&channel)?;
//! assert_eq!(&bytes[0..4], InputChannelRef::MAGIC.to_le_bytes());
//! # Ok::<(), tlwire::Error>(())
//! ```
//!
//! # Design
//!
//! - **Closed constructor sets** - every abstract type is an exhaustive enum;
//!   a missing dispatch arm is a compile error, never a dropped record.
//! - **Derived flags words** - the presence mask is computed from the same
//!   optional fields the encoder writes, so mask and stream cannot diverge.
//! - **Frozen layers** - historical constructors keep their magic and layout
//!   forever; layer selection is the caller's decision at construction time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod schema;
pub mod wire;

pub use wire::{
    BOOL_FALSE_MAGIC, BOOL_TRUE_MAGIC, Error, Flags, OutputStream, Result, SerializeToStream,
    VECTOR_MAGIC, encode,
};
