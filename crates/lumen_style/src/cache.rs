//! Derived-state cache for resolved styles
//!
//! A component keeps one [`StyleCache`] and asks it for its style on every
//! render. The cache resolves again only when the kind, the intent or the
//! theme (name + generation) differs from the last call.

use crate::intent::StyleIntent;
use crate::kinds::KindConfig;
use crate::resolved::ResolvedStyle;
use crate::resolver::StyleResolver;
use lumen_theme::ThemeState;

#[derive(Debug, Clone, PartialEq)]
struct ThemeKey {
    name: String,
    generation: u64,
}

#[derive(Debug)]
struct CacheEntry {
    kind: &'static str,
    intent: StyleIntent,
    theme: ThemeKey,
    style: ResolvedStyle,
}

impl CacheEntry {
    fn matches(&self, kind: &KindConfig, intent: &StyleIntent, theme: &ThemeKey) -> bool {
        self.kind == kind.name && &self.theme == theme && &self.intent == intent
    }
}

/// Last resolved style of one component instance
#[derive(Debug, Default)]
pub struct StyleCache {
    entry: Option<CacheEntry>,
    resolutions: u64,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached style, if any
    pub fn get(&self) -> Option<&ResolvedStyle> {
        self.entry.as_ref().map(|e| &e.style)
    }

    /// Number of times the cache had to resolve
    pub fn resolutions(&self) -> u64 {
        self.resolutions
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Return the cached style, resolving first if anything changed.
    ///
    /// `generation` identifies the theme revision; pass
    /// [`ThemeState::generation`] or any counter bumped on theme swaps.
    pub fn resolve(
        &mut self,
        resolver: &StyleResolver<'_>,
        kind: &KindConfig,
        intent: &StyleIntent,
        generation: u64,
    ) -> &ResolvedStyle {
        let theme = ThemeKey {
            name: resolver.theme().name().to_string(),
            generation,
        };
        match self.entry.take() {
            Some(entry) if entry.matches(kind, intent, &theme) => &self.entry.insert(entry).style,
            previous => {
                let style = resolver.resolve(kind, intent, previous.as_ref().map(|e| &e.style));
                self.resolutions += 1;
                &self
                    .entry
                    .insert(CacheEntry {
                        kind: kind.name,
                        intent: intent.clone(),
                        theme,
                        style,
                    })
                    .style
            }
        }
    }

    /// Resolve against the process-wide [`ThemeState`] theme
    pub fn resolve_current(&mut self, kind: &KindConfig, intent: &StyleIntent) -> &ResolvedStyle {
        let state = ThemeState::get();
        let theme = state.theme();
        let resolver = StyleResolver::new(&theme);
        self.resolve(&resolver, kind, intent, state.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Shade;
    use crate::kinds::{FLAT_BUTTON, RAISED_BUTTON};
    use lumen_theme::ThemePreset;

    #[test]
    fn reuses_until_inputs_change() {
        let theme = ThemePreset::Lumen.theme();
        let resolver = StyleResolver::new(&theme);
        let mut cache = StyleCache::new();
        let intent = StyleIntent::new().color("primary");

        cache.resolve(&resolver, &RAISED_BUTTON, &intent, 0);
        cache.resolve(&resolver, &RAISED_BUTTON, &intent, 0);
        assert_eq!(cache.resolutions(), 1);

        cache.resolve(&resolver, &RAISED_BUTTON, &intent.clone().shade(Shade::Dark), 0);
        assert_eq!(cache.resolutions(), 2);

        cache.resolve(&resolver, &FLAT_BUTTON, &intent.clone().shade(Shade::Dark), 0);
        assert_eq!(cache.resolutions(), 3);
    }

    #[test]
    fn theme_generation_invalidates() {
        let theme = ThemePreset::Lumen.theme();
        let resolver = StyleResolver::new(&theme);
        let mut cache = StyleCache::new();
        let intent = StyleIntent::new();

        cache.resolve(&resolver, &RAISED_BUTTON, &intent, 3);
        cache.resolve(&resolver, &RAISED_BUTTON, &intent, 4);
        assert_eq!(cache.resolutions(), 2);

        cache.invalidate();
        assert!(cache.get().is_none());
    }
}
