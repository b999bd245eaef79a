use lumen_theme::{Theme, ThemePreset, ThemeState, ThemeValue};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["lumen", "midnight"]);
}

#[test]
fn presets_have_distinct_light_and_dark_primary() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        assert_ne!(
            theme.text("button.color.raised.primary.light").unwrap(),
            theme.text("button.color.raised.primary.dark").unwrap(),
            "Preset {:?} should have distinct light/dark primary colors",
            preset
        );
    }
}

#[test]
fn flat_buttons_share_the_raised_palette() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        for shade in ["light", "dark"] {
            assert_eq!(
                theme.text(&format!("button.color.flat.error.{shade}")).unwrap(),
                theme.text(&format!("button.color.raised.error.{shade}")).unwrap(),
                "preset={preset:?} shade={shade}"
            );
        }
    }
}

#[test]
fn avatar_sizes_grow_with_size_variant() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let small = theme.number("image.size.avatar.small").unwrap();
        let normal = theme.number("image.size.avatar.normal").unwrap();
        let large = theme.number("image.size.avatar.large").unwrap();
        assert!(small < normal && normal < large, "preset={preset:?}");
    }
}

#[test]
fn preset_survives_toml_round_trip() {
    let theme = ThemePreset::Midnight.theme();
    let source = theme.to_toml().unwrap();
    let parsed = Theme::from_toml_str(&source).unwrap();
    pretty_assertions::assert_eq!(parsed, theme);
}

#[test]
fn icon_preset_alias_resolves() {
    let theme = ThemePreset::Lumen.theme();
    assert_eq!(
        theme.lookup("icon.preset.dismiss").unwrap(),
        &ThemeValue::Text("md-close".into())
    );
}

#[test]
fn global_state_defaults_to_lumen() {
    let state = ThemeState::get();
    assert!(state.theme().contains("button.raised.color"));
}
