//! Derived presence masks

/// Presence mask for a constructor's optional content.
///
/// A `Flags` value is computed from the fields it summarizes immediately
/// before those fields are written; it is never stored alongside them, so the
/// mask and the serialized fields cannot drift apart. Bit positions are fixed
/// per constructor and live next to the constructor's definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u32);

impl Flags {
    /// Create an empty mask.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Set bit `bit` iff `present` (boolean flags and multiflag groups).
    #[must_use]
    pub const fn bit(self, bit: u32, present: bool) -> Self {
        debug_assert!(bit < 32, "flags bit out of range");
        if present { Self(self.0 | (1 << bit)) } else { self }
    }

    /// Set bit `bit` iff the optional field is populated.
    #[must_use]
    pub fn opt<T>(self, bit: u32, field: &Option<T>) -> Self {
        self.bit(bit, field.is_some())
    }

    /// Check whether bit `bit` is set.
    #[must_use]
    pub const fn contains(self, bit: u32) -> bool {
        (self.0 & (1 << bit)) != 0
    }

    /// The raw mask as written to the wire.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Check whether no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}
