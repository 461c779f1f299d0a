mod common;

use common::{HostError, RecordingDisplay};
use vfrown_core::core::Rgba;
use vfrown_core::video::indicator::{INDICATORS, INDICATOR_ALPHA};
use vfrown_core::video::{CircleOutline, LedMask, PixelSurface, render_indicators};

const BLACK: Rgba = Rgba::new(0, 0, 0, 128);

#[test]
fn test_red_and_blue_lit() {
    let mut display = RecordingDisplay::new();
    render_indicators(&mut display, LedMask::RED | LedMask::BLUE).unwrap();

    assert_eq!(display.colors_near((50, 30), 20), vec![Rgba::new(255, 0, 0, 128)]);
    assert_eq!(display.colors_near((110, 30), 20), vec![BLACK]);
    assert_eq!(display.colors_near((170, 30), 20), vec![Rgba::new(0, 0, 255, 128)]);
    assert_eq!(display.colors_near((230, 30), 20), vec![BLACK]);
}

#[test]
fn test_all_lit_colors() {
    let mut display = RecordingDisplay::new();
    render_indicators(&mut display, LedMask::all()).unwrap();

    assert_eq!(display.colors_near((110, 30), 20), vec![Rgba::new(255, 255, 0, 128)]);
    assert_eq!(display.colors_near((230, 30), 20), vec![Rgba::new(0, 255, 0, 128)]);
}

#[test]
fn test_draw_order_and_point_count() {
    let mut display = RecordingDisplay::new();
    render_indicators(&mut display, LedMask::empty()).unwrap();

    let per_circle = CircleOutline::new(0, 0, 20).count();
    assert_eq!(display.points.len(), per_circle * 4);

    // Circles are drawn red, yellow, blue, green: left to right
    let firsts: Vec<i32> = display
        .points
        .chunks(per_circle)
        .map(|chunk| chunk.iter().map(|p| p.0).sum::<i32>() / per_circle as i32)
        .collect();
    assert_eq!(firsts, vec![50, 110, 170, 230]);
}

#[test]
fn test_every_indicator_is_translucent() {
    for indicator in &INDICATORS {
        assert_eq!(indicator.color(LedMask::all()).a, INDICATOR_ALPHA);
        assert_eq!(indicator.color(LedMask::empty()), BLACK);
    }
}

#[test]
fn test_clipped_points_do_not_stop_the_overlay() {
    let mut display = RecordingDisplay::new();
    // Right half of the green circle (x 210..=250) falls outside
    display.viewport = Some((220, 240));

    let result = render_indicators(&mut display, LedMask::GREEN);

    assert_eq!(result, Err(HostError("point outside viewport")));
    assert_eq!(display.colors_near((230, 30), 20), vec![Rgba::new(0, 255, 0, 128)]);
    assert!(display.points.iter().any(|p| p.0 == 210));
    assert!(display.points.iter().all(|p| p.0 < 220));
}

#[test]
fn test_renders_onto_a_surface() {
    let mut surface = PixelSurface::new(320, 240);
    render_indicators(&mut surface.pen(), LedMask::YELLOW).unwrap();

    // Yellow at alpha 128: alpha bit + full red + full green
    assert_eq!(surface.get(130, 30), Some(0xFFE0));
    assert_eq!(surface.get(70, 30), Some(0x8000));
    assert_eq!(surface.get(110, 30), Some(0));
}
