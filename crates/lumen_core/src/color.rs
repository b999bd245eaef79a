//! Color string helpers
//!
//! Colors travel through the style pipeline as host color strings
//! (`#rrggbb`, `#rgb`, `transparent`, named colors). Only hex colors can
//! take an alpha suffix.

/// Fully transparent fill.
pub const TRANSPARENT: &str = "transparent";

/// Returns true for `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Append a two-digit hex alpha suffix to an opaque hex color.
///
/// `#rgb` is expanded to `#rrggbb` first. Returns `None` when the color
/// already carries alpha, is not a hex color, or the suffix is not two
/// hex digits.
pub fn with_alpha_suffix(color: &str, suffix: &str) -> Option<String> {
    if suffix.len() != 2 || !suffix.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    if !is_hex_color(color) {
        return None;
    }
    let digits = &color[1..];
    match digits.len() {
        6 => Some(format!("#{digits}{suffix}")),
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            Some(format!("#{expanded}{suffix}"))
        }
        _ => None,
    }
}
