//! Icon preset names

use crate::warnings::{StyleWarning, WarningSink};
use lumen_theme::Theme;

/// Map a preset name through `icon.preset.<name>`.
///
/// Unknown presets warn and pass the name through, so hosts can still render
/// icons that are not in the theme.
pub fn resolve_icon_preset(name: &str, theme: &Theme, sink: &dyn WarningSink) -> String {
    match theme.text(&format!("icon.preset.{name}")) {
        Ok(source) => source.to_string(),
        Err(_) => {
            sink.warn(StyleWarning::UnknownIconPreset(name.to_string()));
            name.to_string()
        }
    }
}
