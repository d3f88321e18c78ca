//! Assertion utilities for robot testing
//!
//! Helpers for validating published frames in robot tests.

use sidenav_app_shell::Frame;
use sidenav_core::Destination;
use sidenav_foundation::Rect;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the frame shows a settled, fully open drawer.
pub fn assert_drawer_open(frame: &Frame, msg: &str) {
    assert!(frame.drawer_open, "{}: drawer closed in {:?}", msg, frame);
    assert_eq!(
        frame.drag_offset, 0.0,
        "{}: drawer open but still offset in {:?}",
        msg, frame
    );
}

pub fn assert_drawer_closed(frame: &Frame, msg: &str) {
    assert!(!frame.drawer_open, "{}: drawer open in {:?}", msg, frame);
    assert!(
        frame.drawer_bounds.is_none(),
        "{}: closed drawer still has bounds in {:?}",
        msg,
        frame
    );
}

pub fn assert_destination(frame: &Frame, expected: Destination, msg: &str) {
    assert_eq!(
        frame.destination, expected,
        "{}: wrong destination in {:?}",
        msg, frame
    );
    assert_eq!(frame.title, expected.title(), "{}: title mismatch", msg);
}
