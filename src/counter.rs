//! Eased numeric counters for the stats grid.
//!
//! A counter ramps a displayed integer from 0 to its target once its tile
//! scrolls into view, easing out so the last few increments land slowly.

use crate::easing::ease_out_cubic;

/// Counter lifecycle. `Settled` is terminal: no further updates are
/// scheduled once the target value is pinned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    /// Not yet visible
    Idle,
    /// Ramping toward the target; `elapsed` accumulates frame time
    Ramping { elapsed: f32 },
    /// Value pinned to the target
    Settled,
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    suffix: String,
    duration: f32,
    phase: CounterPhase,
}

impl Counter {
    pub fn new(target: u32, suffix: impl Into<String>, duration: f32) -> Result<Self, String> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(format!("counter duration must be positive, got {duration}"));
        }
        Ok(Self {
            target,
            suffix: suffix.into(),
            duration,
            phase: CounterPhase::Idle,
        })
    }

    /// Start the ramp. Only transitions out of `Idle`; triggering a ramping
    /// or settled counter is a no-op (reveals fire at most once anyway).
    pub fn trigger(&mut self) {
        if self.phase == CounterPhase::Idle {
            self.phase = if self.target == 0 {
                // Nothing to count up to
                CounterPhase::Settled
            } else {
                CounterPhase::Ramping { elapsed: 0.0 }
            };
        }
    }

    /// Advance by one frame. When progress reaches 1 the value is pinned
    /// exactly to the target, even if frames were throttled or dropped on
    /// the way there.
    pub fn advance(&mut self, dt: f32) {
        if let CounterPhase::Ramping { elapsed } = &mut self.phase {
            *elapsed += dt.max(0.0);
            if *elapsed >= self.duration {
                self.phase = CounterPhase::Settled;
            }
        }
    }

    pub fn value(&self) -> u32 {
        match self.phase {
            CounterPhase::Idle => 0,
            CounterPhase::Settled => self.target,
            CounterPhase::Ramping { elapsed } => {
                let progress = (elapsed / self.duration).min(1.0);
                (ease_out_cubic(progress) * self.target as f32).floor() as u32
            }
        }
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }

    #[allow(dead_code)] // Public API for inspection/tests
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// True while per-frame updates still need to be scheduled
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CounterPhase::Ramping { .. })
    }

    /// Jump straight to the final value (reduced-motion / degraded hosts)
    pub fn force_settle(&mut self) {
        self.phase = CounterPhase::Settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_duration() {
        assert!(Counter::new(10, "+", 0.0).is_err());
        assert!(Counter::new(10, "+", -2.0).is_err());
        assert!(Counter::new(10, "+", f32::NAN).is_err());
    }

    #[test]
    fn test_idle_until_triggered() {
        let mut counter = Counter::new(15, "+", 2.0).unwrap();
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert_eq!(counter.value(), 0);
        // Advancing an idle counter does nothing
        counter.advance(5.0);
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_scenario_fifteen_plus() {
        // target=15, duration=2s, suffix="+"
        let mut counter = Counter::new(15, "+", 2.0).unwrap();
        counter.trigger();
        assert_eq!(counter.value(), 0);

        // At 1s: eased = 1 - 0.5^3 = 0.875, floor(0.875 * 15) = 13
        counter.advance(1.0);
        assert_eq!(counter.value(), 13);

        // At 2s: exactly the target, suffix appended
        counter.advance(1.0);
        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert_eq!(counter.value(), 15);
        assert_eq!(counter.display(), "15+");
    }

    #[test]
    fn test_scenario_hundred_percent() {
        let mut counter = Counter::new(100, "%", 2.0).unwrap();
        counter.trigger();
        assert_eq!(counter.display(), "0%");
        counter.advance(2.0);
        assert_eq!(counter.display(), "100%");
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        let mut counter = Counter::new(87, "+", 2.0).unwrap();
        counter.trigger();
        let mut prev = counter.value();
        for _ in 0..60 {
            counter.advance(0.05);
            let v = counter.value();
            assert!(v >= prev, "counter went backwards: {} -> {}", prev, v);
            prev = v;
        }
        assert_eq!(counter.value(), 87);
    }

    #[test]
    fn test_settled_is_terminal() {
        let mut counter = Counter::new(15, "+", 2.0).unwrap();
        counter.trigger();
        counter.advance(10.0);
        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert!(!counter.is_animating());

        // Further advances and re-triggers change nothing
        counter.advance(1.0);
        counter.trigger();
        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert_eq!(counter.value(), 15);
    }

    #[test]
    fn test_zero_target_settles_immediately() {
        let mut counter = Counter::new(0, "", 2.0).unwrap();
        counter.trigger();
        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert_eq!(counter.value(), 0);
        assert!(!counter.is_animating());
    }

    #[test]
    fn test_no_overshoot_on_oversized_frame() {
        // A single huge frame must still converge exactly on the target
        let mut counter = Counter::new(42, "", 1.5).unwrap();
        counter.trigger();
        counter.advance(100.0);
        assert_eq!(counter.value(), 42);
    }

    #[test]
    fn test_force_settle_from_idle() {
        let mut counter = Counter::new(15, "+", 2.0).unwrap();
        counter.force_settle();
        assert_eq!(counter.value(), 15);
    }
}
