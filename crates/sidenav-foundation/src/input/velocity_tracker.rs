//! Velocity tracking for fling prediction.
//!
//! One-dimensional tracker using the impulse strategy: the velocity is derived
//! from the kinetic energy the recent samples impart, which is robust against
//! the uneven sample spacing of real touch input.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest one contribute.
const HORIZON_MS: i64 = 100;

/// A gap between consecutive samples longer than this means the pointer
/// stopped; older samples are ignored.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Tracks absolute positions along one axis and reports velocity in px/s.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Velocity in units/second, or 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Collected newest first; `ages` are negative offsets from the newest sample.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut ages = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let mut cursor = self.newest;
        let mut previous = newest;
        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms - sample.time_ms;
            let gap = previous.time_ms - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            positions[count] = sample.position;
            ages[count] = -(age as f32);
            previous = sample;
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            cursor = (cursor + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &ages[..count]) * 1000.0
    }

    /// Velocity in units/second clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// Impulse strategy over samples ordered newest first. Returns px/ms.
fn impulse_velocity(positions: &[f32], ages: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let t_old = ages[i];
        let t_new = ages[i - 1];
        if t_old == t_new {
            continue;
        }

        let v_curr = (positions[i - 1] - positions[i]) / (t_new - t_old);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_reports_zero() {
        assert_eq!(VelocityTracker1D::new().calculate_velocity(), 0.0);
    }

    #[test]
    fn single_sample_reports_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_leftward_drag() {
        let mut tracker = VelocityTracker1D::new();
        // 20 px every 10 ms towards the leading edge = -2000 px/s
        for step in 0..5 {
            tracker.add_data_point(step * 10, 250.0 - step as f32 * 20.0);
        }

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity + 2000.0).abs() < 200.0,
            "expected ~-2000, got {}",
            velocity
        );
    }

    #[test]
    fn capped_at_max_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);

        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(0.0), 0.0);
    }

    #[test]
    fn pause_before_release_kills_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 200.0);
        tracker.add_data_point(10, 150.0);
        tracker.add_data_point(10 + ASSUME_STOPPED_MS + 1, 150.0);

        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        for step in 0..4 {
            tracker.add_data_point(150 + step * 10, 100.0 + step as f32 * 100.0);
        }

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10_000.0).abs() < 1_000.0,
            "expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        tracker.reset();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }
}
