//! Geographic points

use crate::wire::{Flags, OutputStream, Result, SerializeToStream};

/// `geoPointEmpty` — no location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPointEmpty;

impl GeoPointEmpty {
    /// Constructor magic
    pub const MAGIC: u32 = 0x1B2A_4F8C;
}

impl SerializeToStream for GeoPointEmpty {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        Ok(())
    }
}

/// `geoPoint` — a WGS-84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPointData {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Estimated accuracy radius in meters (flags bit 0)
    pub accuracy_radius: Option<i32>,
}

impl GeoPointData {
    /// Constructor magic
    pub const MAGIC: u32 = 0xD08F_97B1;

    /// Flags bit for [`Self::accuracy_radius`].
    pub const ACCURACY_BIT: u32 = 0;

    /// Presence mask derived from the optional fields.
    #[must_use]
    pub fn flags(&self) -> Flags {
        Flags::new().opt(Self::ACCURACY_BIT, &self.accuracy_radius)
    }
}

impl SerializeToStream for GeoPointData {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        out.write_u32(Self::MAGIC);
        out.write_u32(self.flags().as_u32());
        out.write_f64(self.longitude);
        out.write_f64(self.latitude);
        if let Some(radius) = self.accuracy_radius {
            out.write_i32(radius);
        }
        Ok(())
    }
}

/// The `GeoPoint` abstract type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeoPoint {
    /// No location
    Empty(GeoPointEmpty),
    /// A concrete coordinate
    Point(GeoPointData),
}

impl GeoPoint {
    /// Magic of the active constructor.
    #[must_use]
    pub const fn magic(&self) -> u32 {
        match self {
            Self::Empty(_) => GeoPointEmpty::MAGIC,
            Self::Point(_) => GeoPointData::MAGIC,
        }
    }
}

impl SerializeToStream for GeoPoint {
    fn serialize_to(&self, out: &mut OutputStream) -> Result<()> {
        match self {
            Self::Empty(c) => c.serialize_to(out),
            Self::Point(c) => c.serialize_to(out),
        }
    }
}
