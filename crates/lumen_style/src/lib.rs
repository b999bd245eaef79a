//! Lumen Style Resolution
//!
//! Turns a component's declared style intent into concrete per-size styles.
//!
//! # Overview
//!
//! - [`StyleIntent`]: shade, overlay, size, color, corner, margin, padding,
//!   disabled/busy flags and raw per-region overrides
//! - [`KindConfig`]: where a component family keeps its defaults and
//!   palettes in the theme, and which regions it renders
//! - [`StyleResolver`]: pure resolution into a [`ResolvedStyle`] holding
//!   every size variant at once
//! - [`StyleCache`]: re-resolves only when the intent or theme changes
//!
//! Unusable configuration never fails resolution. It is reported to a
//! [`WarningSink`] and replaced by a fallback.
//!
//! # Example
//!
//! ```rust
//! use lumen_style::{resolve_style, BoxSpec, ComponentKind, Shade, SizeVariant, StyleIntent};
//! use lumen_theme::ThemePreset;
//!
//! let theme = ThemePreset::Lumen.theme();
//! let intent = StyleIntent::new()
//!     .shade(Shade::Dark)
//!     .color("primary")
//!     .corner(BoxSpec::themed())
//!     .margin(BoxSpec::Uniform(0.0));
//!
//! let style = resolve_style(ComponentKind::RaisedButton.config(), &intent, &theme, None);
//! assert_eq!(
//!     style.get(SizeVariant::Small, "container", "backgroundColor").and_then(|v| v.as_text()),
//!     theme.text("button.color.raised.primary.dark").ok(),
//! );
//! ```

mod cache;
mod color;
mod icon;
mod intent;
pub mod kinds;
mod overlay;
mod resolved;
mod resolver;
mod spacing;
mod warnings;

pub use cache::StyleCache;
pub use color::{ResolvedColors, BUSY, DISABLED, ON_FILL};
pub use icon::resolve_icon_preset;
pub use intent::{
    BoxSpec, CornerSpec, Corners, KeyedRecord, Overlay, Shade, Sides, Size, SizeVariant,
    SpacingSpec, StyleIntent, StyleOverrides, THEMED,
};
pub use kinds::{ColorSlot, ComponentKind, ForegroundMode, KindConfig};
pub use overlay::{OverlayPaint, OUTLINE_WIDTH};
pub use resolved::{RegionStyles, ResolvedStyle};
pub use resolver::{resolve_style, StyleResolver};
pub use spacing::{BoxAttr, SizedRecords};
pub use warnings::{CollectingSink, StyleWarning, TracingSink, WarningSink};
