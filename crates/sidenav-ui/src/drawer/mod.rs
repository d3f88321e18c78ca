//! The side drawer: layout constants, interaction controller and overlay.

mod config;
mod controller;
mod overlay;

pub use config::{DrawerConfig, CLOSE_THRESHOLD_FRACTION, DRAWER_WIDTH, MAX_OVERLAY_OPACITY};
pub use controller::{DragOutcome, DrawerController, DrawerState, DrawerValue};
pub use overlay::overlay_opacity;
