use eframe::egui::{pos2, vec2};
use prompt_overlay::geometry::{preset_position, BOTTOM_MARGIN, SCREEN_MARGIN};

const SCREEN: (f32, f32) = (1920.0, 1080.0);
const WINDOW: (f32, f32) = (400.0, 200.0);

fn preset(col: u8, row: u8) -> eframe::egui::Pos2 {
    preset_position(vec2(SCREEN.0, SCREEN.1), vec2(WINDOW.0, WINDOW.1), col, row)
}

#[test]
fn all_nine_presets_on_a_full_hd_screen() {
    assert_eq!(preset(0, 0), pos2(20.0, 20.0));
    assert_eq!(preset(1, 0), pos2(760.0, 20.0));
    assert_eq!(preset(2, 0), pos2(1500.0, 20.0));

    assert_eq!(preset(0, 1), pos2(20.0, 440.0));
    assert_eq!(preset(1, 1), pos2(760.0, 440.0));
    assert_eq!(preset(2, 1), pos2(1500.0, 440.0));

    assert_eq!(preset(0, 2), pos2(20.0, 820.0));
    assert_eq!(preset(1, 2), pos2(760.0, 820.0));
    assert_eq!(preset(2, 2), pos2(1500.0, 820.0));
}

#[test]
fn bottom_row_reserves_the_taskbar_margin() {
    let p = preset(2, 2);
    assert_eq!(p.y, SCREEN.1 - WINDOW.1 - BOTTOM_MARGIN);
    assert_eq!(p.x, SCREEN.0 - WINDOW.0 - SCREEN_MARGIN);
}

#[test]
fn centered_coordinates_are_floored() {
    let p = preset_position(vec2(1921.0, 1081.0), vec2(400.0, 200.0), 1, 1);
    assert_eq!(p, pos2(760.0, 440.0));
}

#[test]
fn presets_scale_with_the_window_size() {
    let p = preset_position(vec2(1920.0, 1080.0), vec2(600.0, 400.0), 2, 2);
    assert_eq!(p, pos2(1300.0, 620.0));
}
