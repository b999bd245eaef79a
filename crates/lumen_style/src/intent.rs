//! Style intent: what a component asks for before theming
//!
//! Every field is optional; an absent field means "use the theme default",
//! exactly like an explicit `themed`.

use indexmap::IndexMap;
use lumen_core::StyleRecord;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Light/dark variant selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shade {
    Light,
    Dark,
    #[default]
    Themed,
}

impl Shade {
    /// Theme key for shaded palette entries
    pub fn key(self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::Dark => "dark",
            Shade::Themed => "themed",
        }
    }

    pub fn from_name(name: &str) -> Option<Shade> {
        match name {
            "light" => Some(Shade::Light),
            "dark" => Some(Shade::Dark),
            "themed" => Some(Shade::Themed),
            _ => None,
        }
    }
}

/// Fill/border treatment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overlay {
    Opaque,
    Translucent,
    TranslucentOutline,
    Transparent,
    TransparentOutline,
    #[default]
    Themed,
}

impl Overlay {
    pub fn from_name(name: &str) -> Option<Overlay> {
        match name {
            "opaque" => Some(Overlay::Opaque),
            "translucent" => Some(Overlay::Translucent),
            "translucent-outline" => Some(Overlay::TranslucentOutline),
            "transparent" => Some(Overlay::Transparent),
            "transparent-outline" => Some(Overlay::TransparentOutline),
            "themed" => Some(Overlay::Themed),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Overlay::Opaque => "opaque",
            Overlay::Translucent => "translucent",
            Overlay::TranslucentOutline => "translucent-outline",
            Overlay::Transparent => "transparent",
            Overlay::TransparentOutline => "transparent-outline",
            Overlay::Themed => "themed",
        }
    }

    /// Whether content sits on a colored fill
    pub fn is_filled(self) -> bool {
        matches!(
            self,
            Overlay::Opaque | Overlay::Translucent | Overlay::TranslucentOutline
        )
    }

    pub fn is_translucent(self) -> bool {
        matches!(self, Overlay::Translucent | Overlay::TranslucentOutline)
    }

    pub fn is_outlined(self) -> bool {
        matches!(
            self,
            Overlay::TranslucentOutline | Overlay::TransparentOutline
        )
    }
}

/// Requested size variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    Normal,
    Large,
    #[default]
    Themed,
}

impl Size {
    pub fn from_name(name: &str) -> Option<Size> {
        match name {
            "small" => Some(Size::Small),
            "normal" => Some(Size::Normal),
            "large" => Some(Size::Large),
            "themed" => Some(Size::Themed),
            _ => None,
        }
    }

    /// The concrete variant, if this is not `Themed`
    pub fn variant(self) -> Option<SizeVariant> {
        match self {
            Size::Small => Some(SizeVariant::Small),
            Size::Normal => Some(SizeVariant::Normal),
            Size::Large => Some(SizeVariant::Large),
            Size::Themed => None,
        }
    }
}

/// A concrete size variant; resolved styles carry one record set per variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeVariant {
    Small,
    Normal,
    Large,
}

impl SizeVariant {
    pub const ALL: [SizeVariant; 3] = [SizeVariant::Small, SizeVariant::Normal, SizeVariant::Large];

    pub fn key(self) -> &'static str {
        match self {
            SizeVariant::Small => "small",
            SizeVariant::Normal => "normal",
            SizeVariant::Large => "large",
        }
    }

    pub fn from_name(name: &str) -> Option<SizeVariant> {
        Size::from_name(name).and_then(Size::variant)
    }
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Box-like attribute input: a named alias, one number for every side or
/// corner, or an explicit per-side/per-corner record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxSpec<R> {
    Uniform(f32),
    Alias(String),
    Record(R),
}

impl<R> BoxSpec<R> {
    pub fn alias(name: impl Into<String>) -> Self {
        BoxSpec::Alias(name.into())
    }

    pub fn themed() -> Self {
        BoxSpec::Alias(THEMED.to_string())
    }
}

/// Per-side spacing record (margin or padding)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Sides {
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub horizontal: Option<f32>,
    pub vertical: Option<f32>,
}

/// Per-corner radius record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Corners {
    pub top_left: Option<f32>,
    pub top_right: Option<f32>,
    pub bottom_left: Option<f32>,
    pub bottom_right: Option<f32>,
}

/// Records that can list their present keys in theme naming
pub trait KeyedRecord {
    /// `(key, value)` for every key that is set
    fn entries(&self) -> SmallVec<[(&'static str, f32); 6]>;
}

impl KeyedRecord for Sides {
    fn entries(&self) -> SmallVec<[(&'static str, f32); 6]> {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
            ("horizontal", self.horizontal),
            ("vertical", self.vertical),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}

impl KeyedRecord for Corners {
    fn entries(&self) -> SmallVec<[(&'static str, f32); 6]> {
        [
            ("topLeft", self.top_left),
            ("topRight", self.top_right),
            ("bottomLeft", self.bottom_left),
            ("bottomRight", self.bottom_right),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}

pub type SpacingSpec = BoxSpec<Sides>;
pub type CornerSpec = BoxSpec<Corners>;

/// Alias name that defers to the component kind's theme default
pub const THEMED: &str = "themed";

/// Raw per-region overrides, applied last
pub type StyleOverrides = IndexMap<String, StyleRecord>;

/// Everything a component declares about its styling
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleIntent {
    pub shade: Shade,
    pub overlay: Overlay,
    pub size: Size,
    /// Palette name, literal color, or `themed`
    pub color: Option<String>,
    pub corner: Option<CornerSpec>,
    pub margin: Option<SpacingSpec>,
    pub padding: Option<SpacingSpec>,
    pub disabled: bool,
    pub busy: bool,
    pub style: StyleOverrides,
}

impl StyleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = shade;
        self
    }

    pub fn overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn corner(mut self, corner: CornerSpec) -> Self {
        self.corner = Some(corner);
        self
    }

    pub fn margin(mut self, margin: SpacingSpec) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn padding(mut self, padding: SpacingSpec) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// Replace a whole region after theming
    pub fn region_override(mut self, region: impl Into<String>, record: StyleRecord) -> Self {
        self.style.insert(region.into(), record);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_spec_accepts_three_shapes() {
        let uniform: SpacingSpec = serde_json::from_str("4").unwrap();
        assert_eq!(uniform, BoxSpec::Uniform(4.0));

        let alias: CornerSpec = serde_json::from_str(r#""round""#).unwrap();
        assert_eq!(alias, BoxSpec::alias("round"));

        let record: SpacingSpec = serde_json::from_str(r#"{"top": 5}"#).unwrap();
        assert_eq!(
            record,
            BoxSpec::Record(Sides {
                top: Some(5.0),
                ..Default::default()
            })
        );
    }

    #[test]
    fn intent_from_json() {
        let intent: StyleIntent = serde_json::from_str(
            r#"{
                "shade": "dark",
                "overlay": "translucent-outline",
                "color": "primary",
                "corner": {"topLeft": 3}
            }"#,
        )
        .unwrap();
        assert_eq!(intent.shade, Shade::Dark);
        assert_eq!(intent.overlay, Overlay::TranslucentOutline);
        assert_eq!(intent.size, Size::Themed);
        assert_eq!(
            intent.corner.unwrap(),
            BoxSpec::Record(Corners {
                top_left: Some(3.0),
                ..Default::default()
            })
        );
    }

    #[test]
    fn record_entries_skip_unset_keys() {
        let sides = Sides {
            top: Some(5.0),
            horizontal: Some(2.0),
            ..Default::default()
        };
        assert_eq!(
            sides.entries().as_slice(),
            &[("top", 5.0), ("horizontal", 2.0)]
        );
    }
}
