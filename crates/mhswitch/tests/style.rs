//! Style file loading and application.

use mhswitch::{Color, FontWeight, StyleError, Switch, SwitchStyle};
use std::path::PathBuf;

/// Write `contents` to a unique file in the temp dir.
fn write_temp(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mhswitch-style-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write style file");
    path
}

#[test]
fn test_load_yaml_and_apply() {
    let path = write_temp(
        "dark.yaml",
        r##"
on_text: "I"
off_text: "O"
on_color: "#0000ff"
border_color: "#ff000080"
font:
  family: system
  size: 11.0
  weight: medium
"##,
    );
    let style = SwitchStyle::load(&path).expect("load yaml");
    let switch = Switch::with_style(&style);

    assert_eq!(switch.get_on_text(), "I");
    assert_eq!(switch.get_off_text(), "O");
    assert_eq!(switch.get_on_color(), Color::BLUE);
    assert_eq!(switch.get_font().weight, FontWeight::Medium);
    assert!((switch.border_layer().border_color().a - 0.5).abs() < 0.01);
}

#[test]
fn test_load_toml_uppercase_extension() {
    let path = write_temp(
        "light.TOML",
        r##"
off_color = "#ffffff"
border_width = 2.5
corner_radius = 3.0
"##,
    );
    let style = SwitchStyle::load(&path).expect("load toml");
    assert_eq!(style.off_color, Some(Color::WHITE));
    assert_eq!(style.border_width, Some(2.5));
    assert_eq!(style.corner_radius, Some(3.0));
    assert!(style.on_text.is_none());
}

#[test]
fn test_load_yml_extension() {
    let path = write_temp("short.yml", "knob_color: \"#000000\"\n");
    let style = SwitchStyle::load(&path).expect("load yml");
    assert_eq!(style.knob_color, Some(Color::BLACK));
}

#[test]
fn test_load_reports_bad_color() {
    let path = write_temp("broken.yaml", "off_color: \"grey\"\n");
    let err = SwitchStyle::load(&path).unwrap_err();
    assert!(matches!(err, StyleError::Yaml(_)));
    assert!(err.to_string().contains("grey"), "{err}");
}

#[test]
fn test_snapshot_saved_and_reloaded() {
    let switch = Switch::new()
        .on_text("Yes")
        .off_text("No")
        .on_color(Color::rgb(0.2, 0.6, 0.8));
    let yaml = switch.style().to_yaml().expect("serialize");
    let path = write_temp("snapshot.yaml", &yaml);

    let reloaded = SwitchStyle::load(&path).expect("reload");
    let copy = Switch::with_style(&reloaded);
    assert_eq!(copy.get_on_text(), "Yes");
    assert_eq!(copy.get_off_text(), "No");
    let on = copy.get_on_color();
    assert!((on.r - 0.2).abs() < 0.01);
    assert!((on.b - 0.8).abs() < 0.01);
}

#[test]
fn test_layered_styles_merge() {
    let base = SwitchStyle::from_yaml("on_text: \"ON\"\noff_text: \"OFF\"\nborder_width: 1.0\n")
        .expect("base");
    let theme = SwitchStyle::from_toml("border_width = 0.0\n").expect("theme");

    let mut switch = Switch::new();
    switch.apply_style(&base.merge(theme));
    assert_eq!(switch.get_on_text(), "ON");
    assert_eq!(switch.border_layer().border_width(), 0.0);
}
