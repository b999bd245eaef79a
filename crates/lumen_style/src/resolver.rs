//! Style resolution
//!
//! Layering, lowest to highest precedence:
//!
//! 1. Theme defaults for the component kind (`<defaults>.shade`, `.color`, ...)
//! 2. Explicit intent fields (`shade`, `color`, `corner`, ...)
//! 3. Raw per-region `style` overrides, which replace whole regions
//!
//! Resolution is pure: the same intent against the same theme always yields an
//! equal [`ResolvedStyle`], whatever `previous` was.

use crate::color::ColorResolver;
use crate::intent::{Overlay, Shade, Size, SizeVariant, StyleIntent, THEMED};
use crate::kinds::KindConfig;
use crate::overlay::OverlayPaint;
use crate::resolved::{RegionStyles, ResolvedStyle};
use crate::spacing::{BoxAttr, BoxResolver, SizedRecords};
use crate::warnings::{StyleWarning, TracingSink, WarningSink};
use indexmap::IndexMap;
use lumen_core::{with_alpha_suffix, StyleRecord, StyleValue, TRANSPARENT};
use lumen_theme::{Theme, ThemeValue};

/// Resolves [`StyleIntent`]s against one theme
#[derive(Clone, Copy)]
pub struct StyleResolver<'a> {
    theme: &'a Theme,
    sink: &'a dyn WarningSink,
}

impl std::fmt::Debug for StyleResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleResolver")
            .field("theme", &self.theme.name())
            .finish_non_exhaustive()
    }
}

impl<'a> StyleResolver<'a> {
    /// Resolver reporting warnings through `tracing`
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            sink: &TracingSink,
        }
    }

    pub fn with_sink(mut self, sink: &'a dyn WarningSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Resolve `intent` for every size variant of `kind`
    pub fn resolve(
        &self,
        kind: &KindConfig,
        intent: &StyleIntent,
        previous: Option<&ResolvedStyle>,
    ) -> ResolvedStyle {
        let shade = self.themed_choice(
            kind,
            "shade",
            intent.shade,
            Shade::Themed,
            Shade::from_name,
            Shade::Light,
            "light",
        );
        let overlay = self.themed_choice(
            kind,
            "overlay",
            intent.overlay,
            Overlay::Themed,
            Overlay::from_name,
            Overlay::Opaque,
            "opaque",
        );
        let size = self
            .themed_choice(
                kind,
                "size",
                intent.size,
                Size::Themed,
                Size::from_name,
                Size::Normal,
                "normal",
            )
            .variant()
            .unwrap_or(SizeVariant::Normal);

        let requested = match intent.color.as_deref() {
            Some(color) if color != THEMED => color.to_string(),
            _ => self.default_color(kind),
        };
        let colors = ColorResolver {
            theme: self.theme,
            sink: self.sink,
            kind,
            shade,
        }
        .resolve(&requested, overlay, intent.disabled, intent.busy);

        let translucency = self.translucency(kind, overlay, &colors.main);
        let paint = OverlayPaint::new(overlay, &colors.main, &translucency);

        let boxes = self.resolve_boxes(kind, intent);
        let sized = self.resolve_sized(kind);

        let build = |variant: SizeVariant| -> RegionStyles {
            let mut regions: RegionStyles = kind
                .regions
                .iter()
                .map(|r| (r.to_string(), StyleRecord::new()))
                .collect();

            if let Some(region) = kind.overlay_region {
                paint.apply(regions.entry(region.to_string()).or_default());
            }
            for slot in kind.boxes {
                if let Some(records) = boxes.get(&slot.attr) {
                    let record = regions.entry(slot.region.to_string()).or_default();
                    for (property, value) in records.get(variant) {
                        record.insert(property.clone(), value.clone());
                    }
                }
            }
            for (slot, values) in kind.sized.iter().zip(&sized) {
                regions
                    .entry(slot.region.to_string())
                    .or_default()
                    .insert(slot.property.to_string(), values.get(variant).clone());
            }
            for slot in kind.foreground {
                regions
                    .entry(slot.region.to_string())
                    .or_default()
                    .insert(
                        slot.property.to_string(),
                        StyleValue::from(colors.foreground.as_str()),
                    );
            }
            for slot in kind.accent {
                regions
                    .entry(slot.region.to_string())
                    .or_default()
                    .insert(slot.property.to_string(), StyleValue::from(colors.main.as_str()));
            }

            // Raw overrides replace whole regions
            for (region, record) in &intent.style {
                regions.insert(region.clone(), record.clone());
            }
            regions
        };

        let resolved = ResolvedStyle {
            size,
            shade,
            overlay,
            small: build(SizeVariant::Small),
            normal: build(SizeVariant::Normal),
            large: build(SizeVariant::Large),
        };

        if previous == Some(&resolved) {
            tracing::trace!(kind = kind.name, "resolved style unchanged");
        } else {
            tracing::debug!(
                kind = kind.name,
                theme = self.theme.name(),
                shade = shade.key(),
                overlay = overlay.name(),
                size = size.key(),
                color = %colors.main,
                "resolved style"
            );
        }
        resolved
    }

    /// Expand a `Themed` choice from `<defaults>.<field>`
    #[allow(clippy::too_many_arguments)]
    fn themed_choice<T: Copy + PartialEq>(
        &self,
        kind: &KindConfig,
        field: &'static str,
        requested: T,
        themed: T,
        parse: fn(&str) -> Option<T>,
        fallback: T,
        fallback_name: &'static str,
    ) -> T {
        if requested != themed {
            return requested;
        }
        let path = format!("{}.{}", kind.defaults, field);
        let value = match self.theme.text(&path) {
            Ok(value) => value,
            Err(err) => {
                self.sink.warn(StyleWarning::Theme {
                    kind: kind.name,
                    reason: err.to_string(),
                });
                return fallback;
            }
        };
        match parse(value) {
            Some(parsed) if parsed != themed => parsed,
            _ => {
                self.sink.warn(StyleWarning::UnknownThemedValue {
                    kind: kind.name,
                    field,
                    value: value.to_string(),
                    fallback: fallback_name,
                });
                fallback
            }
        }
    }

    fn default_color(&self, kind: &KindConfig) -> String {
        let path = format!("{}.color", kind.defaults);
        match self.theme.text(&path) {
            Ok(color) => color.to_string(),
            Err(err) => {
                self.sink.warn(StyleWarning::Theme {
                    kind: kind.name,
                    reason: err.to_string(),
                });
                TRANSPARENT.to_string()
            }
        }
    }

    /// Alpha suffix for translucent overlays: `<defaults>.translucency`, then
    /// `general.translucency`
    fn translucency(&self, kind: &KindConfig, overlay: Overlay, color: &str) -> String {
        if !overlay.is_translucent() {
            return String::new();
        }
        let suffix = self
            .theme
            .text(&format!("{}.translucency", kind.defaults))
            .or_else(|_| self.theme.text("general.translucency"))
            .unwrap_or_default()
            .to_string();
        if with_alpha_suffix(color, &suffix).is_none() {
            self.sink.warn(StyleWarning::Translucency {
                kind: kind.name,
                color: color.to_string(),
                suffix: suffix.clone(),
            });
        }
        suffix
    }

    fn resolve_boxes(
        &self,
        kind: &KindConfig,
        intent: &StyleIntent,
    ) -> IndexMap<BoxAttr, SizedRecords> {
        let resolver = BoxResolver {
            theme: self.theme,
            sink: self.sink,
            kind: kind.name,
            defaults: kind.defaults,
        };
        let mut boxes = IndexMap::new();
        for slot in kind.boxes {
            if boxes.contains_key(&slot.attr) {
                continue;
            }
            let records = match slot.attr {
                BoxAttr::Margin => resolver.resolve(slot.attr, intent.margin.as_ref()),
                BoxAttr::Padding => resolver.resolve(slot.attr, intent.padding.as_ref()),
                BoxAttr::Corner => resolver.resolve(slot.attr, intent.corner.as_ref()),
            };
            boxes.insert(slot.attr, records);
        }
        boxes
    }

    fn resolve_sized(&self, kind: &KindConfig) -> Vec<PerSize> {
        kind.sized
            .iter()
            .map(|slot| match self.theme.lookup(slot.path) {
                Ok(ThemeValue::Number(n)) => PerSize::uniform(StyleValue::Number(*n as f32)),
                Ok(ThemeValue::Table(table)) => PerSize::from_fn(|size| {
                    let path = format!("{}.{}", slot.path, size.key());
                    match table.get(size.key()).map(|v| self.theme.resolve_value(v, &path)) {
                        Some(Ok(ThemeValue::Number(n))) => StyleValue::Number(*n as f32),
                        _ => {
                            self.sink.warn(StyleWarning::Theme {
                                kind: kind.name,
                                reason: format!("{path} is missing or not a number"),
                            });
                            StyleValue::Null
                        }
                    }
                }),
                Ok(other) => {
                    self.sink.warn(StyleWarning::Theme {
                        kind: kind.name,
                        reason: format!(
                            "{} is a {}, expected number or table",
                            slot.path,
                            other.kind()
                        ),
                    });
                    PerSize::uniform(StyleValue::Null)
                }
                Err(err) => {
                    self.sink.warn(StyleWarning::Theme {
                        kind: kind.name,
                        reason: err.to_string(),
                    });
                    PerSize::uniform(StyleValue::Null)
                }
            })
            .collect()
    }
}

/// One value per size variant
struct PerSize([StyleValue; 3]);

impl PerSize {
    fn uniform(value: StyleValue) -> Self {
        Self([value.clone(), value.clone(), value])
    }

    fn from_fn(f: impl FnMut(SizeVariant) -> StyleValue) -> Self {
        Self(SizeVariant::ALL.map(f))
    }

    fn get(&self, size: SizeVariant) -> &StyleValue {
        &self.0[size as usize]
    }
}

/// Resolve with warnings routed to `tracing`
pub fn resolve_style(
    kind: &KindConfig,
    intent: &StyleIntent,
    theme: &Theme,
    previous: Option<&ResolvedStyle>,
) -> ResolvedStyle {
    StyleResolver::new(theme).resolve(kind, intent, previous)
}
