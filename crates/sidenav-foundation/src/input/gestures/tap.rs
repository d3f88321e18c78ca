//! Tap gesture recogniser.

use crate::geometry::Point;
use crate::input::types::{PointerEvent, PointerEventKind};

/// Reports a tap when the pointer is released without leaving the touch slop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapGesture {
    touch_slop: f32,
    down: Option<Point>,
}

impl TapGesture {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            down: None,
        }
    }

    /// Returns the press position when `event` completes a tap.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<Point> {
        match event.kind {
            PointerEventKind::Down => {
                self.down = Some(event.position);
                None
            }
            PointerEventKind::Move => {
                if let Some(down) = self.down {
                    if (event.position - down).distance() > self.touch_slop {
                        self.down = None;
                    }
                }
                None
            }
            PointerEventKind::Up => {
                let down = self.down.take()?;
                ((event.position - down).distance() <= self.touch_slop).then_some(down)
            }
            PointerEventKind::Cancel => {
                self.down = None;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.down = None;
    }
}
