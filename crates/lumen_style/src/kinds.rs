//! Per-component-kind resolver configuration
//!
//! A [`KindConfig`] tells the resolver where a component family keeps its
//! defaults and palettes in the theme, which regions it renders, and which
//! region/property pairs receive each resolved value.

use crate::spacing::BoxAttr;

/// How foreground (label/icon) colors are chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForegroundMode {
    /// `onfill` entry on filled overlays, the main color on transparent ones
    FollowOverlay,
    /// Always the `onfill` entry
    Fixed,
}

/// A region/property pair receiving a color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSlot {
    pub region: &'static str,
    pub property: &'static str,
}

/// A region receiving a margin, padding or corner record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxSlot {
    pub attr: BoxAttr,
    pub region: &'static str,
}

/// A numeric property read from a (possibly per-size) theme entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizedSlot {
    pub region: &'static str,
    pub property: &'static str,
    pub path: &'static str,
}

/// Resolver table for one component family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindConfig {
    /// Name used in diagnostics
    pub name: &'static str,
    /// Theme table holding `shade`, `overlay`, `color`, `size`, `corner`,
    /// `margin`, `padding` defaults
    pub defaults: &'static str,
    /// Palette table: `<fill_table>.<color>.<shade>`, plus `disabled`/`busy`
    pub fill_table: &'static str,
    /// Palette with `onfill`, `disabled` and `busy` foreground entries
    pub foreground_table: Option<&'static str>,
    pub foreground_mode: ForegroundMode,
    /// Regions the component renders, in render order
    pub regions: &'static [&'static str],
    /// Region painted with the overlay mapping
    pub overlay_region: Option<&'static str>,
    pub foreground: &'static [ColorSlot],
    /// Slots that always take the main color
    pub accent: &'static [ColorSlot],
    pub boxes: &'static [BoxSlot],
    pub sized: &'static [SizedSlot],
    pub supports_busy: bool,
}

const fn color(region: &'static str, property: &'static str) -> ColorSlot {
    ColorSlot { region, property }
}

const fn boxed(attr: BoxAttr, region: &'static str) -> BoxSlot {
    BoxSlot { attr, region }
}

const fn sized(region: &'static str, property: &'static str, path: &'static str) -> SizedSlot {
    SizedSlot {
        region,
        property,
        path,
    }
}

pub const RAISED_BUTTON: KindConfig = KindConfig {
    name: "raised-button",
    defaults: "button.raised",
    fill_table: "button.color.raised",
    foreground_table: Some("button.color.label"),
    foreground_mode: ForegroundMode::FollowOverlay,
    regions: &["container", "label", "icon"],
    overlay_region: Some("container"),
    foreground: &[color("label", "color"), color("icon", "color")],
    accent: &[],
    boxes: &[
        boxed(BoxAttr::Margin, "container"),
        boxed(BoxAttr::Padding, "container"),
        boxed(BoxAttr::Corner, "container"),
    ],
    sized: &[
        sized("container", "height", "button.raised.height"),
        sized("label", "fontSize", "button.raised.font"),
        sized("icon", "size", "button.raised.icon"),
    ],
    supports_busy: true,
};

pub const FLAT_BUTTON: KindConfig = KindConfig {
    name: "flat-button",
    defaults: "button.flat",
    fill_table: "button.color.flat",
    foreground_table: Some("button.color.label"),
    foreground_mode: ForegroundMode::FollowOverlay,
    regions: &["container", "label", "icon"],
    overlay_region: Some("container"),
    foreground: &[color("label", "color"), color("icon", "color")],
    accent: &[],
    boxes: &[
        boxed(BoxAttr::Margin, "container"),
        boxed(BoxAttr::Padding, "container"),
        boxed(BoxAttr::Corner, "container"),
    ],
    sized: &[
        sized("container", "height", "button.flat.height"),
        sized("label", "fontSize", "button.flat.font"),
        sized("icon", "size", "button.flat.icon"),
    ],
    supports_busy: true,
};

pub const FIELD: KindConfig = KindConfig {
    name: "field",
    defaults: "field.default",
    fill_table: "field.color.default",
    foreground_table: Some("field.color.input"),
    foreground_mode: ForegroundMode::Fixed,
    regions: &["container", "input", "underline", "label", "helper"],
    overlay_region: Some("container"),
    foreground: &[color("input", "color")],
    accent: &[
        color("underline", "borderBottomColor"),
        color("label", "color"),
    ],
    boxes: &[
        boxed(BoxAttr::Margin, "container"),
        boxed(BoxAttr::Padding, "input"),
        boxed(BoxAttr::Corner, "container"),
    ],
    sized: &[
        sized("input", "fontSize", "field.default.font"),
        sized("underline", "borderBottomWidth", "field.default.underline"),
    ],
    supports_busy: false,
};

pub const AVATAR: KindConfig = KindConfig {
    name: "avatar",
    defaults: "avatar.default",
    fill_table: "avatar.color.default",
    foreground_table: Some("avatar.color.label"),
    foreground_mode: ForegroundMode::FollowOverlay,
    regions: &["container", "image", "label", "icon"],
    overlay_region: Some("container"),
    foreground: &[color("label", "color"), color("icon", "color")],
    accent: &[],
    boxes: &[
        boxed(BoxAttr::Margin, "container"),
        boxed(BoxAttr::Corner, "container"),
        boxed(BoxAttr::Corner, "image"),
    ],
    sized: &[
        sized("container", "width", "image.size.avatar"),
        sized("container", "height", "image.size.avatar"),
        sized("image", "width", "image.size.avatar"),
        sized("image", "height", "image.size.avatar"),
    ],
    supports_busy: false,
};

pub const DIVIDER: KindConfig = KindConfig {
    name: "divider",
    defaults: "divider.default",
    fill_table: "divider.color.default",
    foreground_table: None,
    foreground_mode: ForegroundMode::FollowOverlay,
    regions: &["container", "line"],
    overlay_region: None,
    foreground: &[],
    accent: &[color("line", "backgroundColor")],
    boxes: &[boxed(BoxAttr::Margin, "container")],
    sized: &[sized("line", "height", "divider.default.thickness")],
    supports_busy: false,
};

/// Built-in component families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    RaisedButton,
    FlatButton,
    Field,
    Avatar,
    Divider,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::RaisedButton,
        ComponentKind::FlatButton,
        ComponentKind::Field,
        ComponentKind::Avatar,
        ComponentKind::Divider,
    ];

    pub fn config(self) -> &'static KindConfig {
        match self {
            ComponentKind::RaisedButton => &RAISED_BUTTON,
            ComponentKind::FlatButton => &FLAT_BUTTON,
            ComponentKind::Field => &FIELD,
            ComponentKind::Avatar => &AVATAR,
            ComponentKind::Divider => &DIVIDER,
        }
    }

    pub fn name(self) -> &'static str {
        self.config().name
    }

    pub fn from_name(name: &str) -> Option<ComponentKind> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}
