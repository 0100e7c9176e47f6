//! Per-entity readiness timer.

/// Readiness clock in `[0.0, 1.0]` gating when an entity may act.
///
/// The timer's own `charge_rate` composes multiplicatively with the
/// orchestrator's global charge rate, so total fill time is
/// `1 / (charge_rate * global_rate)` seconds. A full timer stays pinned at
/// 1.0 until [`reset`](Self::reset) drains it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTimer {
    /// Fill level, always clamped to `[0.0, 1.0]`.
    pub current: f64,
    /// Fill per second of charged time (1.0 fills in one second).
    pub charge_rate: f64,
    /// Whether the timer is currently accruing.
    pub charging: bool,
}

impl ActionTimer {
    pub fn new() -> Self {
        Self {
            current: 0.0,
            charge_rate: 1.0,
            charging: true,
        }
    }

    pub fn with_charge_rate(charge_rate: f64) -> Self {
        Self {
            charge_rate,
            ..Self::new()
        }
    }

    /// Advances the timer by `dt` seconds of charged time. No-op while paused.
    pub fn charge(&mut self, dt: f64) {
        if self.charging {
            self.current = (self.current + dt * self.charge_rate).min(1.0);
        }
    }

    /// Drains the timer back to exactly zero.
    pub fn reset(&mut self) {
        self.current = 0.0;
    }

    /// True once the timer has filled (`current >= 1.0`).
    pub fn is_full(&self) -> bool {
        self.current >= 1.0
    }

    /// Pauses or resumes accrual without losing progress.
    pub fn set_charging(&mut self, charging: bool) {
        self.charging = charging;
    }
}

impl Default for ActionTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_clamps_at_one() {
        let mut timer = ActionTimer::new();
        timer.charge(0.4);
        assert_eq!(timer.current, 0.4);
        timer.charge(5.0);
        assert_eq!(timer.current, 1.0);
    }

    #[test]
    fn charge_applies_own_rate() {
        let mut timer = ActionTimer::with_charge_rate(2.0);
        timer.charge(0.25);
        assert_eq!(timer.current, 0.5);
    }

    #[test]
    fn is_full_is_boundary_exact() {
        let mut timer = ActionTimer::new();
        timer.current = 0.999_999;
        assert!(!timer.is_full());
        timer.current = 1.0;
        assert!(timer.is_full());
    }

    #[test]
    fn reset_yields_exactly_zero() {
        let mut timer = ActionTimer::new();
        timer.charge(0.7);
        timer.reset();
        assert_eq!(timer.current, 0.0);
    }

    #[test]
    fn paused_timer_keeps_progress() {
        let mut timer = ActionTimer::new();
        timer.charge(0.3);
        timer.set_charging(false);
        timer.charge(10.0);
        assert_eq!(timer.current, 0.3);
        timer.set_charging(true);
        timer.charge(0.2);
        assert_eq!(timer.current, 0.5);
    }
}
