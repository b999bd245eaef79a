//! Color resolution
//!
//! Disabled and busy states are checked before any palette lookup. A color
//! name that is not in the kind's palette is used as a literal color, which
//! lets callers bypass the theme with a raw value.

use crate::intent::{Overlay, Shade};
use crate::kinds::{ForegroundMode, KindConfig};
use crate::warnings::{StyleWarning, WarningSink};
use lumen_core::{is_hex_color, TRANSPARENT};
use lumen_theme::{Theme, ThemeError, ThemeValue};

/// Palette entry used while disabled
pub const DISABLED: &str = "disabled";
/// Palette entry used while busy
pub const BUSY: &str = "busy";
/// Foreground entry for content drawn on a fill
pub const ON_FILL: &str = "onfill";

/// Resolved main and foreground colors of one component
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedColors {
    pub main: String,
    pub foreground: String,
}

pub(crate) struct ColorResolver<'a> {
    pub theme: &'a Theme,
    pub sink: &'a dyn WarningSink,
    pub kind: &'a KindConfig,
    pub shade: Shade,
}

impl ColorResolver<'_> {
    /// `requested` is the palette name or literal after `themed` expansion
    pub fn resolve(
        &self,
        requested: &str,
        overlay: Overlay,
        disabled: bool,
        busy: bool,
    ) -> ResolvedColors {
        let busy = busy && self.kind.supports_busy;
        let main = if disabled {
            self.state_entry(self.kind.fill_table, DISABLED)
        } else if busy {
            self.state_entry(self.kind.fill_table, BUSY)
        } else {
            self.palette_or_literal(requested)
        };

        let foreground = match self.kind.foreground_table {
            None => main.clone(),
            Some(table) if disabled => self.entry_or(table, DISABLED, &main),
            Some(table) if busy => self.entry_or(table, BUSY, &main),
            Some(table)
                if self.kind.foreground_mode == ForegroundMode::Fixed || overlay.is_filled() =>
            {
                self.entry_or(table, ON_FILL, &main)
            }
            Some(_) => main.clone(),
        };

        ResolvedColors { main, foreground }
    }

    /// Look `name` up in the fill palette, else take it literally
    fn palette_or_literal(&self, name: &str) -> String {
        match self.shaded(self.kind.fill_table, name) {
            Ok(color) => color,
            Err(ThemeError::MissingPath(_)) => {
                if !looks_like_color(name) {
                    self.sink.warn(StyleWarning::UnknownColor {
                        kind: self.kind.name,
                        value: name.to_string(),
                    });
                }
                name.to_string()
            }
            Err(err) => {
                self.warn_theme(&err);
                name.to_string()
            }
        }
    }

    /// A state entry (`disabled`/`busy`); transparent when the theme lacks it
    fn state_entry(&self, table: &str, entry: &str) -> String {
        self.shaded(table, entry).unwrap_or_else(|err| {
            self.warn_theme(&err);
            TRANSPARENT.to_string()
        })
    }

    fn entry_or(&self, table: &str, entry: &str, fallback: &str) -> String {
        self.shaded(table, entry).unwrap_or_else(|err| {
            self.warn_theme(&err);
            fallback.to_string()
        })
    }

    /// `<table>.<name>` as text, or its `<shade>` child when it is a table
    fn shaded(&self, table: &str, name: &str) -> Result<String, ThemeError> {
        let path = format!("{table}.{name}");
        match self.theme.lookup(&path)? {
            ThemeValue::Text(color) => Ok(color.clone()),
            ThemeValue::Table(_) => Ok(self
                .theme
                .text(&format!("{path}.{}", self.shade.key()))?
                .to_string()),
            _ => Err(ThemeError::TypeMismatch {
                path,
                expected: "color text or shaded table",
            }),
        }
    }

    fn warn_theme(&self, err: &ThemeError) {
        self.sink.warn(StyleWarning::Theme {
            kind: self.kind.name,
            reason: err.to_string(),
        });
    }
}

/// Literal color syntaxes accepted without a warning
fn looks_like_color(value: &str) -> bool {
    is_hex_color(value)
        || value == TRANSPARENT
        || ["rgb(", "rgba(", "hsl(", "hsla("]
            .iter()
            .any(|prefix| value.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{DIVIDER, FIELD, RAISED_BUTTON};
    use crate::warnings::CollectingSink;
    use lumen_theme::ThemePreset;

    fn resolver<'a>(
        theme: &'a Theme,
        sink: &'a CollectingSink,
        kind: &'a KindConfig,
        shade: Shade,
    ) -> ColorResolver<'a> {
        ColorResolver {
            theme,
            sink,
            kind,
            shade,
        }
    }

    #[test]
    fn palette_name_per_shade() {
        let theme = ThemePreset::Lumen.theme();
        let sink = CollectingSink::new();
        let colors = resolver(&theme, &sink, &RAISED_BUTTON, Shade::Dark).resolve(
            "primary",
            Overlay::Opaque,
            false,
            false,
        );
        assert_eq!(colors.main, theme.text("button.color.raised.primary.dark").unwrap());
        assert_eq!(colors.foreground, theme.text("button.color.label.onfill.dark").unwrap());
        assert!(sink.is_empty());
    }

    #[test]
    fn disabled_wins_over_requested_color() {
        let theme = ThemePreset::Lumen.theme();
        let sink = CollectingSink::new();
        for shade in [Shade::Light, Shade::Dark] {
            let colors = resolver(&theme, &sink, &RAISED_BUTTON, shade).resolve(
                "#123456",
                Overlay::Opaque,
                true,
                true,
            );
            let key = shade.key();
            assert_eq!(
                colors.main,
                theme.text(&format!("button.color.raised.disabled.{key}")).unwrap()
            );
            assert_eq!(
                colors.foreground,
                theme.text(&format!("button.color.label.disabled.{key}")).unwrap()
            );
        }
    }

    #[test]
    fn busy_only_applies_to_kinds_that_support_it() {
        let theme = ThemePreset::Lumen.theme();
        let sink = CollectingSink::new();
        let button = resolver(&theme, &sink, &RAISED_BUTTON, Shade::Light).resolve(
            "primary",
            Overlay::Opaque,
            false,
            true,
        );
        assert_eq!(button.main, theme.text("button.color.raised.busy.light").unwrap());

        let field = resolver(&theme, &sink, &FIELD, Shade::Light).resolve(
            "primary",
            Overlay::Transparent,
            false,
            true,
        );
        assert_eq!(field.main, theme.text("field.color.default.primary.light").unwrap());
    }

    #[test]
    fn unknown_name_is_used_literally() {
        let theme = ThemePreset::Lumen.theme();
        let sink = CollectingSink::new();
        let colors = resolver(&theme, &sink, &RAISED_BUTTON, Shade::Light).resolve(
            "#00ff00",
            Overlay::Transparent,
            false,
            false,
        );
        assert_eq!(colors.main, "#00ff00");
        // Transparent overlays draw the label in the main color
        assert_eq!(colors.foreground, "#00ff00");
        assert!(sink.is_empty());

        let colors = resolver(&theme, &sink, &RAISED_BUTTON, Shade::Light).resolve(
            "tomato",
            Overlay::Opaque,
            false,
            false,
        );
        assert_eq!(colors.main, "tomato");
        assert_eq!(sink.take().len(), 1);
    }

    #[test]
    fn kinds_without_foreground_table_reuse_main() {
        let theme = ThemePreset::Lumen.theme();
        let sink = CollectingSink::new();
        let colors = resolver(&theme, &sink, &DIVIDER, Shade::Dark).resolve(
            "divider",
            Overlay::Transparent,
            false,
            false,
        );
        assert_eq!(colors.main, theme.text("divider.color.default.divider.dark").unwrap());
        assert_eq!(colors.foreground, colors.main);
    }
}
