//! Lumen Container Layout
//!
//! Routes a container's children into its named rooms.
//!
//! ```rust
//! use lumen_layout::{distribute_children, RoomChild, CONTENT_LEFT, CONTENT_RIGHT};
//!
//! let children = vec![
//!     RoomChild::new("avatar").room(CONTENT_LEFT),
//!     RoomChild::new("stray").room("unknown"),
//!     RoomChild::new("chevron").room(CONTENT_RIGHT),
//! ];
//! let distribution = distribute_children(children, [CONTENT_LEFT, CONTENT_RIGHT], None);
//!
//! assert_eq!(distribution.room(CONTENT_LEFT)[0].content, "avatar");
//! assert_eq!(distribution.unrouted.len(), 1);
//! ```

pub mod rooms;

pub use rooms::{
    distribute_children, Distribution, InheritedProp, InheritedProps, RoomChild, COLUMN_ROOMS,
    ROW_ROOMS,
};
pub use rooms::{
    ACTIVITY_INDICATOR, BADGE, CONTENT_BOTTOM, CONTENT_LEFT, CONTENT_MIDDLE, CONTENT_RIGHT,
    CONTENT_TOP, MEDIA,
};
