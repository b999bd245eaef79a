//! Resolved style output

use crate::intent::{Overlay, Shade, SizeVariant};
use indexmap::IndexMap;
use lumen_core::{StyleRecord, StyleValue};
use serde::Serialize;

/// Region name -> concrete properties
pub type RegionStyles = IndexMap<String, StyleRecord>;

/// Fully concrete style for every size variant.
///
/// All three variants are always present so switching size is a lookup, not
/// a re-resolution. `shade` and `overlay` are the concrete values the
/// resolution used (never `Themed`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub size: SizeVariant,
    pub shade: Shade,
    pub overlay: Overlay,
    pub small: RegionStyles,
    pub normal: RegionStyles,
    pub large: RegionStyles,
}

impl ResolvedStyle {
    pub fn variant(&self, size: SizeVariant) -> &RegionStyles {
        match size {
            SizeVariant::Small => &self.small,
            SizeVariant::Normal => &self.normal,
            SizeVariant::Large => &self.large,
        }
    }

    pub fn variant_mut(&mut self, size: SizeVariant) -> &mut RegionStyles {
        match size {
            SizeVariant::Small => &mut self.small,
            SizeVariant::Normal => &mut self.normal,
            SizeVariant::Large => &mut self.large,
        }
    }

    /// Regions of the requested size
    pub fn active(&self) -> &RegionStyles {
        self.variant(self.size)
    }

    pub fn region(&self, size: SizeVariant, region: &str) -> Option<&StyleRecord> {
        self.variant(size).get(region)
    }

    /// A single property value
    pub fn get(&self, size: SizeVariant, region: &str, property: &str) -> Option<&StyleValue> {
        self.region(size, region)?.get(property)
    }
}
