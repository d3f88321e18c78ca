pub mod gestures;
pub mod types;
pub mod velocity_tracker;

pub use types::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use super::gestures::{DragEvent, DragGesture, DragValue, EdgeSwipeGesture, TapGesture};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId};
}
