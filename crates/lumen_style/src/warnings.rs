//! Configuration warnings
//!
//! Style resolution never fails. Anything it cannot make sense of is reported
//! to a [`WarningSink`] and replaced by a safe fallback (zero spacing, a
//! transparent color, or the input taken literally).

use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// A recoverable configuration problem found during resolution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleWarning {
    #[error("{kind}: unknown {attr} alias `{name}`, using zero")]
    UnknownAlias {
        kind: &'static str,
        attr: &'static str,
        name: String,
    },

    #[error("{kind}: unknown {attr} key `{key}` ignored")]
    UnknownKey {
        kind: &'static str,
        attr: &'static str,
        key: String,
    },

    #[error("{kind}: `{value}` is neither a palette entry nor a color literal, using it as-is")]
    UnknownColor { kind: &'static str, value: String },

    #[error("{kind}: theme value `{value}` for {field} is not recognized, using {fallback}")]
    UnknownThemedValue {
        kind: &'static str,
        field: &'static str,
        value: String,
        fallback: &'static str,
    },

    #[error("{kind}: theme entry unusable: {reason}")]
    Theme { kind: &'static str, reason: String },

    #[error("{kind}: cannot append alpha `{suffix}` to `{color}`, using the opaque color")]
    Translucency {
        kind: &'static str,
        color: String,
        suffix: String,
    },

    #[error("unknown icon preset `{0}`, using it as the icon name")]
    UnknownIconPreset(String),
}

/// Receives configuration warnings.
///
/// Resolvers take the sink as a parameter so hosts decide where warnings go.
pub trait WarningSink: Send + Sync {
    fn warn(&self, warning: StyleWarning);
}

/// Routes warnings to `tracing::warn!`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: StyleWarning) {
        tracing::warn!(%warning, "style configuration warning");
    }
}

/// Keeps warnings in memory, mostly for tests and tooling
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<StyleWarning>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain collected warnings
    pub fn take(&self) -> Vec<StyleWarning> {
        std::mem::take(&mut *self.warnings.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn is_empty(&self) -> bool {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl WarningSink for CollectingSink {
    fn warn(&self, warning: StyleWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning);
    }
}
