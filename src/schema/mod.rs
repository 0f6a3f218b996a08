//! Constructor catalogue
//!
//! Each abstract type is a closed enum with one case per constructor; the
//! enums are the registry, and dispatch is always an exhaustive match. Layer
//! variants are ordinary constructors frozen at their published layout.
//!
//! Magics are unique across the whole catalogue and stable once published.

mod dialog;
mod geo;
mod input_channel;
mod message;
mod peer;

pub use dialog::{Dialog, DialogV1, DialogV2};
pub use geo::{GeoPoint, GeoPointData, GeoPointEmpty};
pub use input_channel::{InputChannel, InputChannelEmpty, InputChannelRef};
pub use message::{
    EntityBold, EntityTextUrl, Message, MessageData, MessageEmpty, MessageEntity, ReplyTo,
};
pub use peer::{Peer, PeerChannel, PeerChat, PeerUser};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{BOOL_FALSE_MAGIC, BOOL_TRUE_MAGIC, VECTOR_MAGIC};

    #[test]
    fn test_magics_unique_across_catalogue() {
        let magics = [
            PeerUser::MAGIC,
            PeerChat::MAGIC,
            PeerChannel::MAGIC,
            InputChannelEmpty::MAGIC,
            InputChannelRef::MAGIC,
            MessageEmpty::MAGIC,
            MessageData::MAGIC,
            EntityBold::MAGIC,
            EntityTextUrl::MAGIC,
            DialogV1::MAGIC,
            DialogV2::MAGIC,
            GeoPointEmpty::MAGIC,
            GeoPointData::MAGIC,
            // reserved primitives share the same space
            VECTOR_MAGIC,
            BOOL_TRUE_MAGIC,
            BOOL_FALSE_MAGIC,
        ];

        for (i, a) in magics.iter().enumerate() {
            for b in &magics[i + 1..] {
                assert_ne!(a, b, "duplicate magic {a:#010X}");
            }
        }
    }
}
