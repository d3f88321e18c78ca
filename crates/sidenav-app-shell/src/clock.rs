// Use web_time for cross-platform time support (native + WASM)
use web_time::Instant;

/// Time source for pointer event timestamps.
#[derive(Clone, Copy, Debug)]
pub enum Clock {
    Wall { start: Instant },
    /// Only moves through [`Clock::advance`]; used by tests.
    Manual { now_ms: i64 },
}

impl Clock {
    pub fn wall() -> Self {
        Clock::Wall {
            start: Instant::now(),
        }
    }

    pub fn manual() -> Self {
        Clock::Manual { now_ms: 0 }
    }

    pub fn uptime_ms(&self) -> i64 {
        match self {
            Clock::Wall { start } => Instant::now()
                .checked_duration_since(*start)
                .unwrap_or_default()
                .as_millis() as i64,
            Clock::Manual { now_ms } => *now_ms,
        }
    }

    /// Advances a manual clock. Returns `false` for the wall clock.
    pub fn advance(&mut self, millis: i64) -> bool {
        match self {
            Clock::Wall { .. } => false,
            Clock::Manual { now_ms } => {
                *now_ms += millis.max(0);
                true
            }
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::wall()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_forward() {
        let mut clock = Clock::manual();
        assert!(clock.advance(16));
        assert!(clock.advance(-5));
        assert_eq!(clock.uptime_ms(), 16);
    }

    #[test]
    fn wall_clock_ignores_advance() {
        let mut clock = Clock::wall();
        assert!(!clock.advance(1_000));
        assert!(clock.uptime_ms() < 1_000);
    }
}
