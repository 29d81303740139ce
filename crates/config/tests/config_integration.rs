//! Integration tests for the climenu-config crate.

use std::fs;

use climenu_config::{ColourSetting, ConfigError, MarginSetting, StyleConfig};
use climenu_style::{Colour, MenuStyle, NamedColour};
use climenu_terminal::{ColourSupport, StaticTerminal};
use tempfile::TempDir;

#[test]
fn json5_config_styles_menu_on_both_colour_depths() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("climenu.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Menu style for climenu
            fg: { code: 206, fallback: "red" },
            bg: { code: 16, fallback: "white" },
            unselected_marker: "x",
            selected_marker: ">",
            displays_extra: true,
            width: 100,
            margin: 5,
            padding: 5,
        }
        "#,
    )
    .unwrap();

    let config = StyleConfig::load_from(&config_path).unwrap();

    let mut extended = MenuStyle::new(StaticTerminal::new(500, ColourSupport::Extended));
    config.apply_to(&mut extended).unwrap();
    assert_eq!(extended.fg(), Colour::Indexed(206));
    assert_eq!(extended.bg(), Colour::Indexed(16));
    assert_eq!(extended.colours_set_code(), "\x1b[38;5;206;48;5;16m");
    assert_eq!(extended.content_width(), 80);
    assert_eq!(extended.right_hand_padding(20), 65);
    assert_eq!(extended.marker(true), ">");
    assert_eq!(extended.marker(false), "x");
    assert!(extended.displays_extra());

    let mut basic = MenuStyle::new(StaticTerminal::new(500, ColourSupport::Basic));
    config.apply_to(&mut basic).unwrap();
    assert_eq!(basic.fg(), Colour::Named(NamedColour::Red));
    assert_eq!(basic.bg(), Colour::Named(NamedColour::White));
    assert_eq!(basic.colours_set_code(), "\x1b[31;47m");
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let original = StyleConfig {
        fg: Some(ColourSetting::name("green")),
        bg: Some(ColourSetting::code_with_fallback(22, "black")),
        item_extra: Some("[!]".to_string()),
        margin: Some(MarginSetting::Auto),
        ..Default::default()
    };

    original.save_to(&config_path).unwrap();
    let loaded = StyleConfig::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn config_load_from_nonexistent_file_fails() {
    let result = StyleConfig::load_from("/nonexistent/path/climenu.json5");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn config_load_from_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("climenu.json5");
    fs::write(&config_path, "{ fg: ").unwrap();

    let result = StyleConfig::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
}
