//! Drawer interaction controller.
//!
//! Owns the drawer visibility and the horizontal drag offset of the drawer
//! surface. Drags only ever move the drawer towards the leading edge; the
//! release heuristic decides between dismissing and snapping back.

use sidenav_core::{ConfigError, MutableState, Subscription};

use super::config::DrawerConfig;
use super::overlay::overlay_opacity;

/// Observable drawer state.
///
/// `drag_offset` stays within `[-width, 0]` and is `0` whenever the drawer
/// is closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerState {
    pub is_open: bool,
    pub drag_offset: f32,
    pub width: f32,
}

impl DrawerState {
    fn closed(width: f32) -> Self {
        Self {
            is_open: false,
            drag_offset: 0.0,
            width,
        }
    }

    pub fn value(&self) -> DrawerValue {
        match (self.is_open, self.drag_offset != 0.0) {
            (false, _) => DrawerValue::Closed,
            (true, false) => DrawerValue::Open,
            (true, true) => DrawerValue::Dragging,
        }
    }
}

/// Coarse interaction state. `Dragging` is the open state with a non-zero
/// offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawerValue {
    Closed,
    Open,
    Dragging,
}

/// What a drag release decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The drawer was closed when the release arrived.
    Ignored,
    SnappedBack,
    Dismissed,
}

#[derive(Clone, Debug)]
pub struct DrawerController {
    config: DrawerConfig,
    state: MutableState<DrawerState>,
}

impl Default for DrawerController {
    fn default() -> Self {
        let config = DrawerConfig::default();
        Self {
            config,
            state: MutableState::new(DrawerState::closed(config.width)),
        }
    }
}

impl DrawerController {
    pub fn new(config: DrawerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: MutableState::new(DrawerState::closed(config.width)),
        })
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn state(&self) -> DrawerState {
        self.state.get()
    }

    pub fn value(&self) -> DrawerValue {
        self.state.with(DrawerState::value)
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|state| state.is_open)
    }

    pub fn drag_offset(&self) -> f32 {
        self.state.with(|state| state.drag_offset)
    }

    /// Opens the drawer. Opening from closed starts from a settled offset;
    /// an already open drawer keeps any in-flight offset.
    pub fn open(&self) {
        let changed = self.state.update(|state| {
            if !state.is_open {
                state.is_open = true;
                state.drag_offset = 0.0;
            }
        });
        if changed {
            log::debug!("drawer opened");
        }
    }

    pub fn close(&self) {
        let changed = self.state.update(|state| {
            state.is_open = false;
            state.drag_offset = 0.0;
        });
        if changed {
            log::debug!("drawer closed");
        }
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Start of any new interaction with the drawer open. Clears an offset
    /// left behind by an abandoned gesture.
    pub fn on_interaction_started(&self) {
        let changed = self.state.update(|state| {
            if state.is_open {
                state.drag_offset = 0.0;
            }
        });
        if changed {
            log::debug!("cleared stale drag offset");
        }
    }

    /// Follows a drag. Only leftward translations move the drawer, clamped
    /// to its width. No-op while closed.
    pub fn on_drag_changed(&self, translation_x: f32) {
        if !self.is_open() {
            log::trace!("drag change {translation_x} ignored while closed");
            return;
        }
        if translation_x < 0.0 {
            let offset = translation_x.max(-self.config.width);
            self.state.update(|state| state.drag_offset = offset);
        }
    }

    /// Finishes a drag: dismisses when the drawer travelled past the close
    /// threshold or the projected end lies past twice that threshold,
    /// otherwise settles back to fully open.
    pub fn on_drag_ended(&self, translation_x: f32, predicted_translation_x: f32) -> DragOutcome {
        if !self.is_open() {
            log::trace!("drag end {translation_x} ignored while closed");
            return DragOutcome::Ignored;
        }
        let threshold = self.config.close_threshold();
        let past_distance = translation_x < threshold;
        let past_fling = predicted_translation_x < self.config.fling_close_threshold();

        if past_distance || past_fling {
            log::debug!(
                "drag released at {translation_x:.1} (predicted {predicted_translation_x:.1}), dismissing"
            );
            self.close();
            DragOutcome::Dismissed
        } else {
            log::debug!(
                "drag released at {translation_x:.1} (predicted {predicted_translation_x:.1}), snapping back"
            );
            self.state.update(|state| state.drag_offset = 0.0);
            DragOutcome::SnappedBack
        }
    }

    pub fn overlay_opacity(&self) -> f32 {
        self.state.with(|state| {
            overlay_opacity(
                state.drag_offset,
                state.width,
                self.config.max_overlay_opacity,
            )
        })
    }

    /// Notifies `observer` after every committed state change.
    pub fn subscribe(&self, observer: impl Fn(&DrawerState) + 'static) -> Subscription {
        self.state.subscribe(observer)
    }
}
