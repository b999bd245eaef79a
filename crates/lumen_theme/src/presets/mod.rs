//! Built-in theme presets.
//!
//! Every preset produces the same tree layout so component kinds can rely on
//! the paths below; presets only differ in palette and metrics.
//!
//! | Section | Contents |
//! |---------|----------|
//! | `general` | `translucency` alpha suffix |
//! | `corner.<name>` | named corner radii (uniform or per size) |
//! | `spacing.<name>` | named spacing (uniform, per side, or per size) |
//! | `button.raised`, `button.flat` | per-kind defaults and `sizes` |
//! | `button.color.<kind>.<name>.<shade>` | fill palettes |
//! | `button.color.label.<name>.<shade>` | foreground palette (`onfill`, `disabled`, `busy`) |
//! | `field`, `avatar`, `divider` | same pattern for the other component families |
//! | `image.size.avatar.<size>` | avatar edge lengths |
//! | `icon.preset.<name>` | icon preset sources |

use crate::theme::{Theme, ThemeBuilder};
use std::fmt::{Display, Formatter};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Default indigo/pink theme.
    Lumen,
    /// Low-contrast teal theme with rounder corners.
    Midnight,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Lumen => "lumen",
            Self::Midnight => "midnight",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Lumen => "Lumen",
            Self::Midnight => "Midnight",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Lumen, ThemePreset::Midnight];
        &PRESETS
    }

    /// Look a preset up by its id.
    pub fn from_id(id: &str) -> Option<ThemePreset> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Build the complete theme for this preset.
    pub fn theme(self) -> Theme {
        match self {
            Self::Lumen => build_theme(self.id(), &LUMEN_PALETTE, &LUMEN_METRICS),
            Self::Midnight => build_theme(self.id(), &MIDNIGHT_PALETTE, &MIDNIGHT_METRICS),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> Theme {
    preset.theme()
}

/// A light/dark pair of colors
type Shaded = (&'static str, &'static str);

struct Palette {
    primary: Shaded,
    secondary: Shaded,
    accent: Shaded,
    error: Shaded,
    success: Shaded,
    neutral: Shaded,
    disabled: Shaded,
    busy: Shaded,
    on_fill: Shaded,
    on_fill_disabled: Shaded,
    divider: Shaded,
    translucency: &'static str,
}

struct Metrics {
    corner_small: f64,
    corner_round: [f64; 3],
    button_height: [f64; 3],
    button_font: [f64; 3],
    button_icon: [f64; 3],
    avatar_size: [f64; 3],
    field_font: [f64; 3],
}

const LUMEN_PALETTE: Palette = Palette {
    primary: ("#3f51b5", "#7986cb"),
    secondary: ("#e91e63", "#f06292"),
    accent: ("#ff9800", "#ffb74d"),
    error: ("#f44336", "#e57373"),
    success: ("#4caf50", "#81c784"),
    neutral: ("#9e9e9e", "#616161"),
    disabled: ("#bdbdbd", "#424242"),
    busy: ("#9fa8da", "#5c6bc0"),
    on_fill: ("#ffffff", "#212121"),
    on_fill_disabled: ("#757575", "#9e9e9e"),
    divider: ("#e0e0e0", "#424242"),
    translucency: "aa",
};

const LUMEN_METRICS: Metrics = Metrics {
    corner_small: 4.0,
    corner_round: [14.0, 18.0, 22.0],
    button_height: [28.0, 36.0, 44.0],
    button_font: [12.0, 14.0, 16.0],
    button_icon: [16.0, 20.0, 24.0],
    avatar_size: [32.0, 48.0, 64.0],
    field_font: [13.0, 15.0, 17.0],
};

const MIDNIGHT_PALETTE: Palette = Palette {
    primary: ("#00897b", "#4db6ac"),
    secondary: ("#5e35b1", "#9575cd"),
    accent: ("#fdd835", "#fff176"),
    error: ("#c62828", "#ef9a9a"),
    success: ("#2e7d32", "#a5d6a7"),
    neutral: ("#78909c", "#455a64"),
    disabled: ("#cfd8dc", "#37474f"),
    busy: ("#80cbc4", "#26a69a"),
    on_fill: ("#fafafa", "#102027"),
    on_fill_disabled: ("#90a4ae", "#78909c"),
    divider: ("#cfd8dc", "#37474f"),
    translucency: "80",
};

const MIDNIGHT_METRICS: Metrics = Metrics {
    corner_small: 6.0,
    corner_round: [16.0, 20.0, 26.0],
    button_height: [30.0, 38.0, 48.0],
    button_font: [12.0, 14.0, 17.0],
    button_icon: [16.0, 20.0, 26.0],
    avatar_size: [36.0, 52.0, 72.0],
    field_font: [13.0, 15.0, 18.0],
};

fn palette_entries(palette: &Palette) -> [(&'static str, Shaded); 6] {
    [
        ("primary", palette.primary),
        ("secondary", palette.secondary),
        ("accent", palette.accent),
        ("error", palette.error),
        ("success", palette.success),
        ("neutral", palette.neutral),
    ]
}

fn fill_table(mut builder: ThemeBuilder, table: &str, palette: &Palette) -> ThemeBuilder {
    for (name, (light, dark)) in palette_entries(palette) {
        builder = builder.shaded(&format!("{table}.{name}"), light, dark);
    }
    builder
        .shaded(&format!("{table}.disabled"), palette.disabled.0, palette.disabled.1)
        .shaded(&format!("{table}.busy"), palette.busy.0, palette.busy.1)
}

fn foreground_table(builder: ThemeBuilder, table: &str, palette: &Palette) -> ThemeBuilder {
    builder
        .shaded(&format!("{table}.onfill"), palette.on_fill.0, palette.on_fill.1)
        .shaded(
            &format!("{table}.disabled"),
            palette.on_fill_disabled.0,
            palette.on_fill_disabled.1,
        )
        .shaded(&format!("{table}.busy"), palette.on_fill.0, palette.on_fill.1)
}

fn build_theme(name: &str, palette: &Palette, metrics: &Metrics) -> Theme {
    let [round_s, round_n, round_l] = metrics.corner_round;
    let mut b = ThemeBuilder::new(name)
        .set("general.translucency", palette.translucency)
        // Named corners
        .set("corner.none", 0.0)
        .set("corner.small", metrics.corner_small)
        .sized("corner.round", round_s, round_n, round_l)
        .set("corner.top.topLeft", metrics.corner_small)
        .set("corner.top.topRight", metrics.corner_small)
        // Named spacing
        .set("spacing.none", 0.0)
        .set("spacing.narrow", 4.0)
        .set("spacing.normal", 8.0)
        .set("spacing.wide", 16.0)
        .set("spacing.stacked.bottom", 8.0)
        .set("spacing.inset.horizontal", 16.0)
        .set("spacing.inset.vertical", 8.0);

    // Buttons
    let [h_s, h_n, h_l] = metrics.button_height;
    let [f_s, f_n, f_l] = metrics.button_font;
    let [i_s, i_n, i_l] = metrics.button_icon;
    b = b
        .set("button.raised.shade", "light")
        .set("button.raised.overlay", "opaque")
        .set("button.raised.color", "primary")
        .set("button.raised.size", "normal")
        .alias("button.raised.corner", "corner.small")
        .alias("button.raised.margin", "spacing.none")
        .set("button.raised.padding.small.horizontal", 8.0)
        .set("button.raised.padding.small.vertical", 4.0)
        .set("button.raised.padding.normal.horizontal", 12.0)
        .set("button.raised.padding.normal.vertical", 6.0)
        .set("button.raised.padding.large.horizontal", 16.0)
        .set("button.raised.padding.large.vertical", 8.0)
        .sized("button.raised.height", h_s, h_n, h_l)
        .sized("button.raised.font", f_s, f_n, f_l)
        .sized("button.raised.icon", i_s, i_n, i_l)
        .set("button.flat.shade", "light")
        .set("button.flat.overlay", "transparent")
        .set("button.flat.color", "primary")
        .set("button.flat.size", "normal")
        .alias("button.flat.corner", "corner.small")
        .alias("button.flat.margin", "spacing.none")
        .alias("button.flat.padding", "button.raised.padding")
        .alias("button.flat.height", "button.raised.height")
        .alias("button.flat.font", "button.raised.font")
        .alias("button.flat.icon", "button.raised.icon");
    b = fill_table(b, "button.color.raised", palette);
    b = b.alias("button.color.flat", "button.color.raised");
    b = foreground_table(b, "button.color.label", palette);

    // Text fields
    let [ff_s, ff_n, ff_l] = metrics.field_font;
    b = b
        .set("field.default.shade", "light")
        .set("field.default.overlay", "transparent")
        .set("field.default.color", "primary")
        .set("field.default.size", "normal")
        .alias("field.default.corner", "corner.none")
        .alias("field.default.margin", "spacing.stacked")
        .set("field.default.padding.vertical", 6.0)
        .sized("field.default.font", ff_s, ff_n, ff_l)
        .sized("field.default.underline", 1.0, 1.0, 2.0);
    b = fill_table(b, "field.color.default", palette);
    b = foreground_table(b, "field.color.input", palette);
    // Input text is drawn on the surface, not on the fill
    b = b.shaded("field.color.input.onfill", palette.on_fill.1, palette.on_fill.0);

    // Avatars
    let [a_s, a_n, a_l] = metrics.avatar_size;
    b = b
        .sized("image.size.avatar", a_s, a_n, a_l)
        .set("avatar.default.shade", "light")
        .set("avatar.default.overlay", "opaque")
        .set("avatar.default.color", "neutral")
        .set("avatar.default.size", "normal")
        .alias("avatar.default.corner", "corner.round")
        .alias("avatar.default.margin", "spacing.none");
    b = fill_table(b, "avatar.color.default", palette);
    b = foreground_table(b, "avatar.color.label", palette);

    // Dividers
    b = b
        .set("divider.default.shade", "light")
        .set("divider.default.overlay", "transparent")
        .set("divider.default.color", "divider")
        .set("divider.default.size", "normal")
        .alias("divider.default.corner", "corner.none")
        .alias("divider.default.margin", "spacing.narrow")
        .sized("divider.default.thickness", 1.0, 1.0, 2.0);
    b = fill_table(b, "divider.color.default", palette);
    b = b.shaded("divider.color.default.divider", palette.divider.0, palette.divider.1);

    // Icons
    b = b
        .set("icon.preset.close", "md-close")
        .set("icon.preset.search", "md-search")
        .set("icon.preset.back", "md-arrow-back")
        .set("icon.preset.menu", "md-menu")
        .set("icon.preset.clear", "md-close-circle")
        .alias("icon.preset.dismiss", "icon.preset.close");

    tracing::trace!(name, "built preset theme");
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for preset in ThemePreset::all() {
            let theme = preset.theme();
            assert!(theme.validate().is_ok(), "{preset} has broken aliases");
        }
    }

    #[test]
    fn from_id_round_trips() {
        for preset in ThemePreset::all() {
            assert_eq!(ThemePreset::from_id(preset.id()), Some(*preset));
        }
        assert_eq!(ThemePreset::from_id("nope"), None);
    }
}
