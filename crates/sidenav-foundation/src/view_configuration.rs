//! Shared gesture constants for consistent touch/pointer handling.
//!
//! All distances are in logical pixels.

use sidenav_core::ConfigError;

/// Distance the pointer must travel from the press position before a drag
/// on the drawer surface begins. Below it, a release is a tap.
///
/// Matches the usual platform touch slop (Android uses ~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// An edge swipe must start closer than this to the leading edge.
pub const EDGE_SWIPE_WIDTH: f32 = 20.0;

/// An edge swipe must travel further than this to the right.
pub const EDGE_SWIPE_MIN_TRANSLATION: f32 = 50.0;

/// Platform-tunable gesture configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    pub touch_slop: f32,
    pub max_fling_velocity: f32,
    /// Screen density used by the fling model (1.0 = baseline).
    pub density: f32,
    pub edge_swipe_width: f32,
    pub edge_swipe_min_translation: f32,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD,
            max_fling_velocity: MAX_FLING_VELOCITY,
            density: 1.0,
            edge_swipe_width: EDGE_SWIPE_WIDTH,
            edge_swipe_min_translation: EDGE_SWIPE_MIN_TRANSLATION,
        }
    }
}

impl ViewConfiguration {
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_max_fling_velocity(mut self, max_fling_velocity: f32) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_edge_swipe(mut self, edge_width: f32, min_translation: f32) -> Self {
        self.edge_swipe_width = edge_width;
        self.edge_swipe_min_translation = min_translation;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::ensure_positive("touch slop", self.touch_slop)?;
        ConfigError::ensure_positive("max fling velocity", self.max_fling_velocity)?;
        ConfigError::ensure_positive("density", self.density)?;
        ConfigError::ensure_positive("edge swipe width", self.edge_swipe_width)?;
        ConfigError::ensure_positive(
            "edge swipe minimum translation",
            self.edge_swipe_min_translation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ViewConfiguration::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.edge_swipe_width, 20.0);
        assert_eq!(config.edge_swipe_min_translation, 50.0);
    }

    #[test]
    fn rejects_non_positive_values() {
        let config = ViewConfiguration::default().with_density(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "density",
                value: 0.0
            })
        );
        assert!(ViewConfiguration::default()
            .with_touch_slop(f32::NAN)
            .validate()
            .is_err());
    }
}
