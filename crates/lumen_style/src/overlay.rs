//! Overlay modes: fill and border treatment
//!
//! The mapping is the same for every component family, so it lives here once.
//!
//! | Overlay | Fill | Border color | Border width |
//! |---------|------|--------------|--------------|
//! | `opaque` | color | transparent | 0 |
//! | `translucent` | color + alpha suffix | transparent | 0 |
//! | `translucent-outline` | color + alpha suffix | color | 1 |
//! | `transparent` | transparent | transparent | 0 |
//! | `transparent-outline` | transparent | color | 1 |

use crate::intent::Overlay;
use lumen_core::{with_alpha_suffix, StyleRecord, StyleValue, TRANSPARENT};

/// Border width of outlined overlays
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Concrete fill/border for one overlay mode
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayPaint {
    pub fill: String,
    pub border_color: String,
    pub border_width: f32,
}

impl OverlayPaint {
    /// Paint `color` with `overlay`.
    ///
    /// Translucent fills append `translucency` to hex colors; colors that
    /// cannot take a suffix stay opaque. `Themed` must be resolved by the
    /// caller and paints like `Opaque`.
    pub fn new(overlay: Overlay, color: &str, translucency: &str) -> Self {
        let translucent =
            || with_alpha_suffix(color, translucency).unwrap_or_else(|| color.to_string());
        let (fill, border_color, border_width) = match overlay {
            Overlay::Opaque | Overlay::Themed => (color.to_string(), TRANSPARENT.to_string(), 0.0),
            Overlay::Translucent => (translucent(), TRANSPARENT.to_string(), 0.0),
            Overlay::TranslucentOutline => (translucent(), color.to_string(), OUTLINE_WIDTH),
            Overlay::Transparent => (TRANSPARENT.to_string(), TRANSPARENT.to_string(), 0.0),
            Overlay::TransparentOutline => {
                (TRANSPARENT.to_string(), color.to_string(), OUTLINE_WIDTH)
            }
        };
        Self {
            fill,
            border_color,
            border_width,
        }
    }

    /// Write `backgroundColor`, `borderColor` and `borderWidth`
    pub fn apply(&self, record: &mut StyleRecord) {
        record.insert("backgroundColor".into(), StyleValue::from(self.fill.as_str()));
        record.insert(
            "borderColor".into(),
            StyleValue::from(self.border_color.as_str()),
        );
        record.insert("borderWidth".into(), StyleValue::from(self.border_width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: &str = "#f44336";

    #[test]
    fn opaque_and_transparent() {
        assert_eq!(
            OverlayPaint::new(Overlay::Opaque, RED, "aa"),
            OverlayPaint {
                fill: RED.into(),
                border_color: TRANSPARENT.into(),
                border_width: 0.0
            }
        );
        assert_eq!(
            OverlayPaint::new(Overlay::Transparent, RED, "aa").fill,
            TRANSPARENT
        );
    }

    #[test]
    fn translucent_appends_alpha() {
        let paint = OverlayPaint::new(Overlay::Translucent, RED, "aa");
        assert_eq!(paint.fill, "#f44336aa");
        assert_eq!(paint.border_width, 0.0);
    }

    #[test]
    fn outlines_use_the_color_for_the_border() {
        let paint = OverlayPaint::new(Overlay::TranslucentOutline, RED, "aa");
        assert_eq!(paint.fill, "#f44336aa");
        assert_eq!(paint.border_color, RED);
        assert_eq!(paint.border_width, 1.0);

        let paint = OverlayPaint::new(Overlay::TransparentOutline, RED, "aa");
        assert_eq!(paint.fill, TRANSPARENT);
        assert_eq!(paint.border_color, RED);
        assert_eq!(paint.border_width, 1.0);
    }

    #[test]
    fn non_hex_colors_stay_opaque_when_translucent() {
        let paint = OverlayPaint::new(Overlay::Translucent, "red", "aa");
        assert_eq!(paint.fill, "red");
    }
}
