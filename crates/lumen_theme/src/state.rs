//! Process-wide default theme
//!
//! Resolvers take the theme they resolve against explicitly. `ThemeState`
//! only exists so applications have one shared default to pass in. The theme
//! is never mutated in place: replacing it swaps the whole `Arc` and bumps a
//! generation counter that derived-style caches compare against.

use crate::presets::ThemePreset;
use crate::theme::Theme;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the host to re-render after a theme swap
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// The host registers a function that schedules re-resolution and repaint
/// whenever the process-wide theme is replaced.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(callback);
}

/// Trigger a redraw via the registered callback
fn trigger_redraw() {
    let callback = *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(callback) = callback {
        callback();
    }
}

/// Shared handle to the current default theme
pub struct ThemeState {
    theme: RwLock<Arc<Theme>>,
    generation: AtomicU64,
}

impl ThemeState {
    fn new(theme: Theme) -> Self {
        Self {
            theme: RwLock::new(Arc::new(theme)),
            generation: AtomicU64::new(0),
        }
    }

    /// Initialize the global theme state (call once at app startup).
    ///
    /// Returns `false` if the state was already initialized; use
    /// [`ThemeState::set_theme`] to replace the theme afterwards.
    pub fn init(theme: Theme) -> bool {
        let name = theme.name().to_string();
        let installed = THEME_STATE.set(ThemeState::new(theme)).is_ok();
        if installed {
            tracing::debug!(theme = %name, "ThemeState initialized");
        } else {
            tracing::debug!(theme = %name, "ThemeState already initialized, ignoring init");
        }
        installed
    }

    /// Initialize with a built-in preset
    pub fn init_preset(preset: ThemePreset) -> bool {
        Self::init(preset.theme())
    }

    /// Get the global theme state, falling back to the default preset
    pub fn get() -> &'static ThemeState {
        THEME_STATE.get_or_init(|| ThemeState::new(ThemePreset::Lumen.theme()))
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// The current theme
    pub fn theme(&self) -> Arc<Theme> {
        self.theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole theme and notify the host
    pub fn set_theme(&self, theme: Theme) {
        tracing::debug!(
            from = %self.theme().name(),
            to = %theme.name(),
            "ThemeState::set_theme"
        );
        *self.theme.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(theme);
        self.generation.fetch_add(1, Ordering::SeqCst);
        trigger_redraw();
    }

    /// Incremented on every [`ThemeState::set_theme`]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
