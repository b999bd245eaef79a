//! Room-based children distribution
//!
//! Containers declare named rooms (`content-left`, `media`, ...). Each child
//! names the room it wants; routed children receive the container's inherited
//! presentation props unless they list a prop in their exclusions. Children
//! without a declared room are passed through unrouted, never dropped.

use indexmap::IndexMap;
use lumen_core::{StyleRecord, StyleValue};
use lumen_style::{ResolvedStyle, Shade, SizeVariant};
use smallvec::SmallVec;

pub const CONTENT_LEFT: &str = "content-left";
pub const CONTENT_MIDDLE: &str = "content-middle";
pub const CONTENT_RIGHT: &str = "content-right";
pub const CONTENT_TOP: &str = "content-top";
pub const CONTENT_BOTTOM: &str = "content-bottom";
pub const MEDIA: &str = "media";
pub const BADGE: &str = "badge";
pub const ACTIVITY_INDICATOR: &str = "activity-indicator";

/// Rooms of a horizontal row or list item
pub const ROW_ROOMS: [&str; 6] = [
    CONTENT_LEFT,
    CONTENT_MIDDLE,
    CONTENT_RIGHT,
    MEDIA,
    BADGE,
    ACTIVITY_INDICATOR,
];

/// Rooms of a vertical column
pub const COLUMN_ROOMS: [&str; 5] = [CONTENT_TOP, CONTENT_MIDDLE, CONTENT_BOTTOM, MEDIA, BADGE];

/// Presentation props a container can hand down
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InheritedProp {
    Shade,
    Size,
    Margin,
    Indentation,
    LabelColor,
    IconColor,
}

impl InheritedProp {
    pub const ALL: [InheritedProp; 6] = [
        InheritedProp::Shade,
        InheritedProp::Size,
        InheritedProp::Margin,
        InheritedProp::Indentation,
        InheritedProp::LabelColor,
        InheritedProp::IconColor,
    ];

    /// Prop name as children see it
    pub fn name(self) -> &'static str {
        match self {
            InheritedProp::Shade => "shade",
            InheritedProp::Size => "size",
            InheritedProp::Margin => "margin",
            InheritedProp::Indentation => "indentation",
            InheritedProp::LabelColor => "labelColor",
            InheritedProp::IconColor => "iconColor",
        }
    }

    pub fn from_name(name: &str) -> Option<InheritedProp> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Values a container injects into routed children
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InheritedProps {
    values: IndexMap<InheritedProp, StyleValue>,
}

impl InheritedProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shade, size, zeroed spacing, and the label/icon colors of a resolved
    /// container style
    pub fn from_resolved(style: &ResolvedStyle) -> Self {
        let mut props = Self::new()
            .shade(style.shade)
            .size(style.size)
            .zero_spacing();
        let color = |region: &str| {
            style
                .active()
                .get(region)
                .and_then(|r| r.get("color"))
                .and_then(StyleValue::as_text)
                .map(str::to_string)
        };
        if let Some(label) = color("label") {
            props = props.label_color(label);
        }
        if let Some(icon) = color("icon") {
            props = props.icon_color(icon);
        }
        props
    }

    pub fn shade(self, shade: Shade) -> Self {
        self.set(InheritedProp::Shade, StyleValue::from(shade.key()))
    }

    pub fn size(self, size: SizeVariant) -> Self {
        self.set(InheritedProp::Size, StyleValue::from(size.key()))
    }

    /// Zero margin and indentation so children sit flush in their room
    pub fn zero_spacing(self) -> Self {
        self.set(InheritedProp::Margin, StyleValue::Number(0.0))
            .set(InheritedProp::Indentation, StyleValue::Number(0.0))
    }

    pub fn label_color(self, color: impl Into<String>) -> Self {
        self.set(InheritedProp::LabelColor, StyleValue::Text(color.into()))
    }

    pub fn icon_color(self, color: impl Into<String>) -> Self {
        self.set(InheritedProp::IconColor, StyleValue::Text(color.into()))
    }

    pub fn set(mut self, prop: InheritedProp, value: StyleValue) -> Self {
        self.values.insert(prop, value);
        self
    }

    pub fn get(&self, prop: InheritedProp) -> Option<&StyleValue> {
        self.values.get(&prop)
    }

    pub fn iter(&self) -> impl Iterator<Item = (InheritedProp, &StyleValue)> {
        self.values.iter().map(|(p, v)| (*p, v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A child as a container receives it
#[derive(Clone, Debug, PartialEq)]
pub struct RoomChild<T> {
    /// Room the child asks for
    pub room: Option<String>,
    /// Inherited props the child keeps for itself
    pub exclusions: SmallVec<[InheritedProp; 2]>,
    pub props: StyleRecord,
    pub content: T,
}

impl<T> RoomChild<T> {
    pub fn new(content: T) -> Self {
        Self {
            room: None,
            exclusions: SmallVec::new(),
            props: StyleRecord::new(),
            content,
        }
    }

    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    pub fn exclude(mut self, prop: InheritedProp) -> Self {
        if !self.exclusions.contains(&prop) {
            self.exclusions.push(prop);
        }
        self
    }

    /// Exclusions by prop name; unknown names are ignored
    pub fn exclude_names<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            match InheritedProp::from_name(name) {
                Some(prop) => self = self.exclude(prop),
                None => tracing::trace!(name, "ignoring unknown inherited prop exclusion"),
            }
        }
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    fn inherit(&mut self, inherited: &InheritedProps) {
        for (prop, value) in inherited.iter() {
            if !self.exclusions.contains(&prop) {
                self.props.insert(prop.name().to_string(), value.clone());
            }
        }
    }
}

/// Children partitioned by room
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution<T> {
    /// One bucket per declared room, in declaration order
    pub rooms: IndexMap<String, Vec<RoomChild<T>>>,
    /// Children with no declared room, in their original order
    pub unrouted: Vec<RoomChild<T>>,
}

impl<T> Distribution<T> {
    pub fn room(&self, name: &str) -> &[RoomChild<T>] {
        self.rooms.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of children, routed or not
    pub fn len(&self) -> usize {
        self.rooms.values().map(Vec::len).sum::<usize>() + self.unrouted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Route `children` into `room_names`, injecting `inherited` into routed
/// children.
pub fn distribute_children<'a, T>(
    children: impl IntoIterator<Item = RoomChild<T>>,
    room_names: impl IntoIterator<Item = &'a str>,
    inherited: Option<&InheritedProps>,
) -> Distribution<T> {
    let mut rooms: IndexMap<String, Vec<RoomChild<T>>> = room_names
        .into_iter()
        .map(|name| (name.to_string(), Vec::new()))
        .collect();
    let mut unrouted = Vec::new();

    for mut child in children {
        let bucket = child.room.as_deref().and_then(|room| rooms.get_mut(room));
        match bucket {
            Some(bucket) => {
                if let Some(inherited) = inherited {
                    child.inherit(inherited);
                }
                bucket.push(child);
            }
            None => {
                tracing::trace!(room = ?child.room, "passing child through unrouted");
                unrouted.push(child);
            }
        }
    }

    Distribution { rooms, unrouted }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_names_round_trip() {
        for prop in InheritedProp::ALL {
            assert_eq!(InheritedProp::from_name(prop.name()), Some(prop));
        }
        assert_eq!(InheritedProp::from_name("opacity"), None);
    }

    #[test]
    fn exclusions_keep_child_values() {
        let inherited = InheritedProps::new().shade(Shade::Dark).zero_spacing();
        let child = RoomChild::new(())
            .room(CONTENT_LEFT)
            .prop("margin", 12.0_f32)
            .exclude_names(["margin", "bogus"]);

        let distribution = distribute_children([child], ROW_ROOMS, Some(&inherited));
        let routed = &distribution.room(CONTENT_LEFT)[0];
        assert_eq!(routed.props["margin"], StyleValue::Number(12.0));
        assert_eq!(routed.props["shade"], StyleValue::from("dark"));
        assert_eq!(routed.props["indentation"], StyleValue::Number(0.0));
    }

    #[test]
    fn duplicate_room_names_share_a_bucket() {
        let children = [RoomChild::new(1).room(MEDIA), RoomChild::new(2).room(MEDIA)];
        let distribution = distribute_children(children, [MEDIA, MEDIA], None);
        assert_eq!(distribution.rooms.len(), 1);
        assert_eq!(distribution.room(MEDIA).len(), 2);
        assert!(distribution.room(BADGE).is_empty());
    }
}
