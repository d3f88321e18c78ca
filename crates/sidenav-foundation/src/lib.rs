//! Foundation elements for the SideNav drawer shell: geometry, pointer input
//! and the gesture recognisers the shell routes pointer streams through.

pub mod geometry;
pub mod input;
pub mod view_configuration;

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod gesture_tests;

pub use geometry::{Point, Rect, Size};
pub use input::gestures::{
    DragEvent, DragGesture, DragValue, EdgeSwipeGesture, FlingCalculator, TapGesture,
};
pub use input::{PointerEvent, PointerEventKind, PointerId, VelocityTracker1D};
pub use view_configuration::{
    ViewConfiguration, DRAG_THRESHOLD, EDGE_SWIPE_MIN_TRANSLATION, EDGE_SWIPE_WIDTH,
    MAX_FLING_VELOCITY,
};

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::input::prelude::*;
    pub use crate::view_configuration::ViewConfiguration;
}
