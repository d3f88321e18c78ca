//! Layout constants of the drawer.

use sidenav_core::ConfigError;

/// Default drawer width in logical pixels.
pub const DRAWER_WIDTH: f32 = 280.0;

/// Dragging past this fraction of the width towards the leading edge closes
/// the drawer on release.
pub const CLOSE_THRESHOLD_FRACTION: f32 = 1.0 / 3.0;

/// Opacity of the dimming overlay while the drawer is settled open.
pub const MAX_OVERLAY_OPACITY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    pub width: f32,
    pub close_threshold_fraction: f32,
    pub max_overlay_opacity: f32,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            width: DRAWER_WIDTH,
            close_threshold_fraction: CLOSE_THRESHOLD_FRACTION,
            max_overlay_opacity: MAX_OVERLAY_OPACITY,
        }
    }
}

impl DrawerConfig {
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_close_threshold_fraction(mut self, fraction: f32) -> Self {
        self.close_threshold_fraction = fraction;
        self
    }

    pub fn with_max_overlay_opacity(mut self, opacity: f32) -> Self {
        self.max_overlay_opacity = opacity;
        self
    }

    /// Release distance threshold (negative, towards the leading edge).
    pub fn close_threshold(&self) -> f32 {
        -self.width * self.close_threshold_fraction
    }

    /// Threshold for the projected end position of a release. Twice the
    /// distance threshold, so only a real fling qualifies.
    pub fn fling_close_threshold(&self) -> f32 {
        self.close_threshold() * 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::ensure_positive("drawer width", self.width)?;
        ConfigError::ensure_positive("close threshold fraction", self.close_threshold_fraction)?;
        ConfigError::ensure_in_range(
            "close threshold fraction",
            self.close_threshold_fraction,
            0.0,
            1.0,
        )?;
        ConfigError::ensure_in_range("max overlay opacity", self.max_overlay_opacity, 0.0, 1.0)
    }
}
