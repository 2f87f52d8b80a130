//! Slide-in overlay geometry and blending

use slidein::config::ConsoleConfig;
use slidein::overlay::{blend_pixel, blend_region, OverlayBounds, SlideInGeometry};

#[test]
fn test_geometry_from_config() {
    let config = ConsoleConfig {
        panel_width: 300,
        wide_panel_width: 600,
        ..ConsoleConfig::default()
    };
    let geometry = SlideInGeometry::from_config(&config);

    assert_eq!(geometry.panel_bounds(1000, 700, false).width, 300);
    assert_eq!(geometry.panel_bounds(1000, 700, true).width, 600);
    assert_eq!(geometry.panel_bounds(1000, 700, true).x, 400);
}

#[test]
fn test_default_geometry_matches_default_config() {
    let from_default = SlideInGeometry::default().panel_bounds(1920, 1080, false);
    let from_config =
        SlideInGeometry::from_config(&ConsoleConfig::default()).panel_bounds(1920, 1080, false);
    assert_eq!(from_default, from_config);
}

#[test]
fn test_sliding_bounds_clamps_progress() {
    let geometry = SlideInGeometry::new(400, 800);

    let over = geometry.sliding_bounds(1000, 600, false, 1.5);
    assert_eq!(over, geometry.panel_bounds(1000, 600, false));

    let under = geometry.sliding_bounds(1000, 600, false, -1.0);
    assert_eq!(under.width, 0);
}

#[test]
fn test_sliding_bounds_tiny_viewport() {
    let geometry = SlideInGeometry::new(400, 800);
    let bounds = geometry.sliding_bounds(1, 1, true, 1.0);
    assert_eq!(bounds.x, 0);
    assert_eq!(bounds.width, 1);
}

#[test]
fn test_backdrop_hit_outside_panel_only() {
    let geometry = SlideInGeometry::new(400, 800);

    assert!(geometry.is_backdrop_hit(10.0, 10.0, 1000, 600, false));
    assert!(!geometry.is_backdrop_hit(700.0, 10.0, 1000, 600, false));
    // Wide panel covers more of the page
    assert!(!geometry.is_backdrop_hit(300.0, 10.0, 1000, 600, true));
    // Outside the window is never a hit
    assert!(!geometry.is_backdrop_hit(-1.0, 10.0, 1000, 600, false));
    assert!(!geometry.is_backdrop_hit(10.0, 600.0, 1000, 600, false));
}

#[test]
fn test_bounds_contains() {
    let bounds = OverlayBounds {
        x: 10,
        y: 20,
        width: 30,
        height: 40,
    };
    assert!(bounds.contains(10.0, 20.0));
    assert!(bounds.contains(39.9, 59.9));
    assert!(!bounds.contains(40.0, 30.0));
    assert!(!bounds.contains(9.9, 30.0));
}

#[test]
fn test_blend_pixel_half_alpha() {
    // 50% black over white
    let result = blend_pixel(0x80_00_00_00, 0xFF_FF_FF_FF);
    let r = (result >> 16) & 0xFF;
    assert!(r > 0x70 && r < 0x90);
    assert_eq!(result >> 24, 0xFF);
}

#[test]
fn test_blend_region_only_touches_bounds() {
    let (width, height) = (8, 4);
    let mut buffer = vec![0xFF_FF_FF_FF; width * height];
    let bounds = OverlayBounds {
        x: 4,
        y: 0,
        width: 10,
        height: 2,
    };

    blend_region(&mut buffer, &bounds, 0xFF_00_00_00, width, height);

    assert_eq!(buffer[0], 0xFF_FF_FF_FF);
    assert_eq!(buffer[4], 0xFF_00_00_00);
    assert_eq!(buffer[width + 7], 0xFF_00_00_00);
    assert_eq!(buffer[2 * width + 4], 0xFF_FF_FF_FF);
}
