//! Lumen Core
//!
//! Foundational value types shared by the Lumen crates:
//!
//! - **Style values**: [`StyleValue`], the concrete value of a single visual property
//! - **Style records**: [`StyleRecord`], a flat property -> value mapping for one region
//! - **Color helpers**: hex color detection and alpha-suffix application
//!
//! # Example
//!
//! ```rust
//! use lumen_core::{record, StyleValue};
//!
//! let container = record([
//!     ("backgroundColor", StyleValue::from("#3f51b5")),
//!     ("borderWidth", StyleValue::from(0.0)),
//! ]);
//! assert_eq!(container["borderWidth"], StyleValue::Number(0.0));
//! ```

pub mod color;
pub mod value;

pub use color::{is_hex_color, with_alpha_suffix, TRANSPARENT};
pub use value::{record, StyleRecord, StyleValue};
