//! Room distribution with inherited props from a resolved container style

use lumen_core::StyleValue;
use lumen_layout::{
    distribute_children, InheritedProp, InheritedProps, RoomChild, BADGE, CONTENT_LEFT,
    CONTENT_MIDDLE, CONTENT_RIGHT, ROW_ROOMS,
};
use lumen_style::{resolve_style, ComponentKind, Shade, Size, StyleIntent};
use lumen_theme::ThemePreset;
use pretty_assertions::assert_eq;

#[test]
fn routes_known_rooms_and_passes_the_rest_through() {
    let children = vec![
        RoomChild::new("left").room(CONTENT_LEFT),
        RoomChild::new("unknown").room("unknown"),
        RoomChild::new("right").room(CONTENT_RIGHT),
    ];
    let distribution = distribute_children(children, [CONTENT_LEFT, CONTENT_RIGHT], None);

    assert_eq!(distribution.room(CONTENT_LEFT).len(), 1);
    assert_eq!(distribution.room(CONTENT_RIGHT).len(), 1);
    assert_eq!(distribution.unrouted.len(), 1);
    assert_eq!(distribution.unrouted[0].content, "unknown");
    assert_eq!(distribution.unrouted[0].room.as_deref(), Some("unknown"));
}

#[test]
fn every_child_lands_exactly_once() {
    let rooms = [CONTENT_LEFT, CONTENT_MIDDLE, BADGE];
    let children: Vec<_> = (0..40)
        .map(|i| {
            let child = RoomChild::new(i);
            match i % 5 {
                0 => child,
                1 => child.room(CONTENT_LEFT),
                2 => child.room(CONTENT_MIDDLE),
                3 => child.room(BADGE),
                _ => child.room("card-header-left"),
            }
        })
        .collect();

    let distribution = distribute_children(children, rooms, None);
    assert_eq!(distribution.len(), 40);

    let mut seen: Vec<i32> = distribution
        .rooms
        .values()
        .flatten()
        .chain(&distribution.unrouted)
        .map(|c| c.content)
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..40).collect::<Vec<_>>());

    assert_eq!(distribution.unrouted.len(), 16);
    // Order within a bucket follows the input
    let lefts: Vec<i32> = distribution.room(CONTENT_LEFT).iter().map(|c| c.content).collect();
    assert_eq!(lefts, [1, 6, 11, 16, 21, 26, 31, 36]);
}

#[test]
fn routed_children_inherit_container_presentation() {
    let theme = ThemePreset::Lumen.theme();
    let container = resolve_style(
        ComponentKind::RaisedButton.config(),
        &StyleIntent::new().shade(Shade::Dark).size(Size::Large),
        &theme,
        None,
    );
    let inherited = InheritedProps::from_resolved(&container);
    let label = theme.text("button.color.label.onfill.dark").unwrap();
    assert_eq!(inherited.get(InheritedProp::LabelColor), Some(&StyleValue::from(label)));

    let children = vec![
        RoomChild::new("icon").room(CONTENT_LEFT).prop("shade", "light"),
        RoomChild::new("caption")
            .room(CONTENT_MIDDLE)
            .prop("shade", "light")
            .exclude(InheritedProp::Shade),
        RoomChild::new("loose").prop("shade", "light"),
    ];
    let distribution = distribute_children(children, ROW_ROOMS, Some(&inherited));

    let icon = &distribution.room(CONTENT_LEFT)[0].props;
    assert_eq!(icon["shade"], StyleValue::from("dark"));
    assert_eq!(icon["size"], StyleValue::from("large"));
    assert_eq!(icon["margin"], StyleValue::Number(0.0));
    assert_eq!(icon["iconColor"], StyleValue::from(label));

    let caption = &distribution.room(CONTENT_MIDDLE)[0].props;
    assert_eq!(caption["shade"], StyleValue::from("light"));
    assert_eq!(caption["labelColor"], StyleValue::from(label));

    // Unrouted children are rendered as-is
    let loose = &distribution.unrouted[0].props;
    assert_eq!(loose.len(), 1);
    assert_eq!(loose["shade"], StyleValue::from("light"));
}
