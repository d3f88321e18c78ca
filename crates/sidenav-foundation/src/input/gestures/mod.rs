pub mod drag;
pub mod edge_swipe;
pub mod fling;
pub mod tap;

pub use drag::{DragEvent, DragGesture, DragValue};
pub use edge_swipe::EdgeSwipeGesture;
pub use fling::FlingCalculator;
pub use tap::TapGesture;
