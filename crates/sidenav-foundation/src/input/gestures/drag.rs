//! Drag gesture recogniser.
//!
//! Turns a Down/Move/Up stream into drag callbacks carrying the translation
//! from the press position and, on release, the predicted end translation.

use super::fling::FlingCalculator;
use crate::geometry::Point;
use crate::input::types::{PointerEvent, PointerEventKind};
use crate::input::velocity_tracker::VelocityTracker1D;
use crate::view_configuration::ViewConfiguration;

/// Snapshot of an in-flight or finished drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragValue {
    pub start_location: Point,
    pub location: Point,
    pub translation: Point,
    /// Horizontal release velocity in px/s, capped by the view configuration.
    /// Zero until the pointer is released.
    pub velocity_x: f32,
    /// Horizontal translation the drag would reach if it kept coasting.
    pub predicted_end_translation_x: f32,
    pub uptime_ms: i64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Changed(DragValue),
    Ended(DragValue),
    /// The pointer was cancelled after the drag started. No end event follows.
    Cancelled,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    start: Point,
    start_ms: i64,
    dragging: bool,
}

#[derive(Clone, Debug)]
pub struct DragGesture {
    minimum_distance: f32,
    max_fling_velocity: f32,
    fling: FlingCalculator,
    velocity: VelocityTracker1D,
    press: Option<Press>,
}

impl DragGesture {
    /// A drag that starts once the pointer leaves the configured touch slop.
    pub fn new(configuration: &ViewConfiguration) -> Self {
        Self::with_minimum_distance(configuration, configuration.touch_slop)
    }

    /// A drag that starts once the pointer travelled `minimum_distance`.
    /// With `0.0` the drag starts on press.
    pub fn with_minimum_distance(configuration: &ViewConfiguration, minimum_distance: f32) -> Self {
        Self {
            minimum_distance: minimum_distance.max(0.0),
            max_fling_velocity: configuration.max_fling_velocity,
            fling: FlingCalculator::with_density(configuration.density),
            velocity: VelocityTracker1D::new(),
            press: None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.press.map(|press| press.dragging).unwrap_or(false)
    }

    pub fn on_event(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        match event.kind {
            PointerEventKind::Down => {
                self.velocity.reset();
                self.velocity
                    .add_data_point(event.uptime_ms, event.position.x);
                let dragging = self.minimum_distance == 0.0;
                self.press = Some(Press {
                    start: event.position,
                    start_ms: event.uptime_ms,
                    dragging,
                });
                dragging.then(|| DragEvent::Changed(self.value_at(event, false)))
            }
            PointerEventKind::Move => {
                let press = self.press.as_mut()?;
                self.velocity
                    .add_data_point(event.uptime_ms, event.position.x);
                if !press.dragging {
                    let travelled = (event.position - press.start).distance();
                    if travelled < self.minimum_distance {
                        return None;
                    }
                    press.dragging = true;
                    log::trace!(
                        "drag started after {:.1}px ({}ms)",
                        travelled,
                        event.uptime_ms - press.start_ms
                    );
                }
                Some(DragEvent::Changed(self.value_at(event, false)))
            }
            PointerEventKind::Up => {
                let press = self.press?;
                if !press.dragging {
                    self.reset();
                    return None;
                }
                self.velocity
                    .add_data_point(event.uptime_ms, event.position.x);
                let value = self.value_at(event, true);
                self.reset();
                Some(DragEvent::Ended(value))
            }
            PointerEventKind::Cancel => {
                let was_dragging = self.is_dragging();
                self.reset();
                was_dragging.then_some(DragEvent::Cancelled)
            }
        }
    }

    pub fn reset(&mut self) {
        self.press = None;
        self.velocity.reset();
    }

    fn value_at(&self, event: &PointerEvent, released: bool) -> DragValue {
        let start = self.press.map(|press| press.start).unwrap_or(event.position);
        let translation = event.position - start;
        let velocity_x = if released {
            self.velocity
                .calculate_velocity_with_max(self.max_fling_velocity)
        } else {
            0.0
        };
        DragValue {
            start_location: start,
            location: event.position,
            translation,
            velocity_x,
            predicted_end_translation_x: self.fling.predict_end(translation.x, velocity_x),
            uptime_ms: event.uptime_ms,
        }
    }
}
