//! Fling projection.
//!
//! Predicts where a released drag would come to rest if it kept decelerating
//! under the Android scroller friction model. The drawer uses the projected
//! end translation to dismiss on a quick flick even when the finger itself
//! travelled only a short distance.

/// Tension curve inflection point of the scroller spline.
const INFLECTION: f64 = 0.35;

/// Earth's gravity in SI units (m/s²)
const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter (for density conversion)
const INCHES_PER_METER: f32 = 39.37;
/// (ln(0.78) / ln(0.9)).abs(), from the Android scroller.
const DECELERATION_RATE: f64 = 2.358_201_6;

fn compute_deceleration(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl Default for FlingCalculator {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl FlingCalculator {
    /// Default friction value (matches Android default)
    pub const DEFAULT_FRICTION: f32 = 0.015;

    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: compute_deceleration(0.84, density),
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        (INFLECTION * velocity.abs() as f64
            / (self.friction * self.physical_coefficient) as f64)
            .ln()
    }

    /// Unsigned distance a fling at `velocity` (px/s) travels before stopping.
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 || !velocity.is_finite() {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE - 1.0;
        self.friction
            * self.physical_coefficient
            * (DECELERATION_RATE / decel_minus_one * l).exp() as f32
    }

    /// Duration of a fling at `velocity` (px/s) in milliseconds.
    pub fn fling_duration(&self, velocity: f32) -> i64 {
        if velocity == 0.0 || !velocity.is_finite() {
            return 0;
        }
        let l = self.spline_deceleration(velocity);
        (1000.0 * (l / (DECELERATION_RATE - 1.0)).exp()) as i64
    }

    /// Where a drag released at `translation` with `velocity` would come to rest.
    pub fn predict_end(&self, translation: f32, velocity: f32) -> f32 {
        translation + self.fling_distance(velocity) * velocity.signum()
    }
}
