//! Lumen Theme System
//!
//! A nested, read-only style dictionary addressed by dotted semantic paths
//! (`button.color.raised.primary.dark`, `image.size.avatar.small`).
//!
//! # Overview
//!
//! - **Theme tree**: [`Theme`] holds [`ThemeValue`] leaves (numbers, text,
//!   booleans) grouped in tables
//! - **Aliases**: a text leaf starting with `@` points at another path
//!   (`"@corner.small"`); lookups follow aliases with a hop bound so a
//!   cyclic theme can never hang resolution
//! - **Presets**: complete built-in themes ([`ThemePreset`])
//! - **Process-wide state**: [`ThemeState`] holds a default theme that can be
//!   swapped as a whole
//!
//! # Quick Start
//!
//! ```rust
//! use lumen_theme::{ThemeBuilder, ThemeValue};
//!
//! let theme = ThemeBuilder::new("demo")
//!     .set("corner.small", 4.0)
//!     .set("button.raised.corner", "@corner.small")
//!     .build();
//!
//! assert_eq!(theme.number("button.raised.corner").unwrap(), 4.0);
//! assert!(matches!(theme.lookup("corner"), Ok(ThemeValue::Table(_))));
//! ```

mod error;
pub mod presets;
pub mod state;
pub mod theme;
mod value;

pub use error::{Result, ThemeError};
pub use presets::{preset_theme, ThemePreset};
pub use state::{set_redraw_callback, ThemeState};
pub use theme::{Theme, ThemeBuilder, DEFAULT_MAX_ALIAS_HOPS};
pub use value::{ThemeTable, ThemeValue, ALIAS_PREFIX};
