use std::fs;

use tempfile::tempdir;

use prompt_overlay::settings::{
    clamp_font, color_to_hex, next_opacity, parse_hex_color, OverlayConfig, FONT_MAX, FONT_MIN,
    OPACITY_LEVELS, OPACITY_MAX, OPACITY_MIN,
};

#[test]
fn missing_file_yields_the_defaults() {
    let dir = tempdir().unwrap();
    let config = OverlayConfig::load(&dir.path().join("nope.json"));
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn corrupt_file_yields_the_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ this is not json").unwrap();

    let config = OverlayConfig::load(&path);
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn partial_file_merges_over_the_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"opacity": 0.6, "text": "abc"}"#).unwrap();

    let config = OverlayConfig::load(&path);
    assert_eq!(config.opacity, 0.6);
    assert_eq!(config.text, "abc");
    assert_eq!(config.width, 400.0);
    assert_eq!(config.font_family, "Consolas");
}

#[test]
fn unknown_keys_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"future_option": true, "font_size": 14}"#).unwrap();

    let config = OverlayConfig::load(&path);
    assert_eq!(config.font_size, 14.0);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = OverlayConfig::default();
    config.x = 640.0;
    config.text = "line one\nline two".to_string();
    config.locked = true;
    config.save(&path).unwrap();

    assert_eq!(OverlayConfig::load(&path), config);
}

#[test]
fn save_creates_the_containing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("app").join("config.json");
    OverlayConfig::default().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn out_of_range_values_are_clamped_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"opacity": 2.0, "font_size": 500, "width": 50, "height": 10}"#,
    )
    .unwrap();

    let config = OverlayConfig::load(&path);
    assert_eq!(config.opacity, OPACITY_MAX);
    assert_eq!(config.font_size, FONT_MAX);
    assert_eq!(config.width, 200.0);
    assert_eq!(config.height, 150.0);
}

#[test]
fn opacity_never_drops_below_the_readable_floor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"opacity": 0.05}"#).unwrap();
    assert_eq!(OverlayConfig::load(&path).opacity, OPACITY_MIN);
}

#[test]
fn font_clamp_bounds() {
    assert_eq!(clamp_font(7.0), FONT_MIN);
    assert_eq!(clamp_font(49.0), FONT_MAX);
    assert_eq!(clamp_font(11.0), 11.0);
}

#[test]
fn opacity_levels_cycle_and_wrap() {
    let mut level = OPACITY_LEVELS[0];
    let mut seen = Vec::new();
    for _ in 0..OPACITY_LEVELS.len() {
        seen.push(level);
        level = next_opacity(level);
    }
    assert_eq!(seen, OPACITY_LEVELS);
    assert_eq!(level, OPACITY_LEVELS[0]);
}

#[test]
fn off_list_opacity_snaps_to_the_nearest_level() {
    // 0.9 sits nearest 0.85, so the next stop is 0.70.
    assert_eq!(next_opacity(0.9), 0.70);
    assert_eq!(next_opacity(0.55), 1.0);
}

#[test]
fn hex_colors_parse_and_format() {
    use eframe::egui::Color32;

    assert_eq!(parse_hex_color("#FFFFFF"), Some(Color32::WHITE));
    assert_eq!(parse_hex_color("2d2d2d"), Some(Color32::from_rgb(0x2d, 0x2d, 0x2d)));
    assert_eq!(parse_hex_color("#2D2D2D"), Some(Color32::from_rgb(0x2d, 0x2d, 0x2d)));
    assert!(parse_hex_color("#fff").is_none());
    assert!(parse_hex_color("not a color").is_none());

    let color = Color32::from_rgb(0xe0, 0xa0, 0x30);
    assert_eq!(parse_hex_color(&color_to_hex(color)), Some(color));
}
