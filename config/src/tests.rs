//! # Tests for Config Constants
//!
//! Sanity checks on the default policy values.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(0.0, 1.0));
}

// =============================================================================
// SIZING AND RANGE TESTS
// =============================================================================

#[test]
fn test_default_box_height() {
    assert_eq!(DEFAULT_BOX_HEIGHT, 0.2);
}

#[test]
fn test_distance_bounds() {
    assert_eq!(MIN_DISTANCE, 0.3);
    assert_eq!(MAX_DISTANCE, 2.0);
    assert!(MIN_DISTANCE < MAX_DISTANCE);
}

#[test]
fn test_marker_fits_inside_box() {
    // Marker centered at half height must not poke through top or bottom
    let radius = DEFAULT_BOX_HEIGHT / MARKER_RADIUS_DIVISOR;
    assert!(radius < DEFAULT_BOX_HEIGHT / 2.0);
}

// =============================================================================
// COLOR TESTS
// =============================================================================

#[test]
fn test_colors_valid_rgba() {
    for color in [EDGE_COLOR, MARKER_COLOR, VOLUME_COLOR] {
        for component in color.iter() {
            assert!(*component >= 0.0 && *component <= 1.0);
        }
    }
}

#[test]
fn test_marker_is_opaque() {
    assert_eq!(MARKER_COLOR[3], 1.0);
}

#[test]
fn test_volume_is_transparent() {
    assert_eq!(VOLUME_COLOR[3], 0.0);
}

#[test]
fn test_edge_thickness_is_thin() {
    assert!(EDGE_THICKNESS > 0.0 && EDGE_THICKNESS < 0.01);
}
