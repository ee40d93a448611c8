//! Fixed-interval tick pacing for the breathing callback

use std::time::Duration;

/// Accumulates elapsed time and reports how many whole intervals passed.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    pending: Duration,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        IntervalTimer {
            interval: interval.max(Duration::from_millis(1)),
            pending: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance by `dt`, returning the number of ticks that fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.pending += dt;
        let mut fired = 0;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_accumulate() {
        let mut timer = IntervalTimer::new(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(60)), 0);
        assert_eq!(timer.advance(Duration::from_millis(60)), 1);
        assert_eq!(timer.advance(Duration::from_millis(250)), 2);
        timer.reset();
        assert_eq!(timer.advance(Duration::from_millis(90)), 0);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let timer = IntervalTimer::new(Duration::ZERO);
        assert_eq!(timer.interval(), Duration::from_millis(1));
    }
}
