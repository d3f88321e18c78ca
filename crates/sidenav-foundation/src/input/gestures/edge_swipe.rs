//! Edge swipe recogniser: a rightward drag that starts at the leading edge.

use super::drag::DragValue;
use crate::view_configuration::ViewConfiguration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSwipeGesture {
    edge_width: f32,
    min_translation: f32,
}

impl EdgeSwipeGesture {
    pub fn new(configuration: &ViewConfiguration) -> Self {
        Self {
            edge_width: configuration.edge_swipe_width,
            min_translation: configuration.edge_swipe_min_translation,
        }
    }

    /// Whether a finished drag counts as an open request.
    ///
    /// Both bounds are strict: starting exactly at `edge_width` or travelling
    /// exactly `min_translation` does not qualify.
    pub fn accepts(&self, value: &DragValue) -> bool {
        value.start_location.x < self.edge_width && value.translation.x > self.min_translation
    }
}
