//! Transient floating damage/heal numbers.
//!
//! Effects are decoupled from action execution: the worker emits one when a
//! damage or heal resolves, and the renderer polls the effect manager each
//! frame for whatever is still alive.

use crate::types::Vec2;

/// Upward drift applied to an effect's position, in pixels per second.
const FLOAT_SPEED: f64 = 30.0;

/// A floating damage/heal number with an independent fade lifecycle.
///
/// `alpha` and `position` are derived from elapsed time rather than stored;
/// only `elapsed` advances as the effect manager ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEffect {
    origin: Vec2,
    value: i32,
    duration: f64,
    elapsed: f64,
    healing: bool,
}

impl DamageEffect {
    pub fn new(origin: Vec2, value: i32, duration: f64, healing: bool) -> Self {
        Self {
            origin,
            value,
            duration,
            elapsed: 0.0,
            healing,
        }
    }

    /// Advances the effect's lifetime by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear fade from 1.0 down to 0.0 over the effect's duration.
    pub fn alpha(&self) -> f32 {
        if self.elapsed >= self.duration {
            return 0.0;
        }
        (1.0 - self.elapsed / self.duration) as f32
    }

    /// Current position: the origin drifted upward over time.
    pub fn position(&self) -> Vec2 {
        Vec2 {
            x: self.origin.x,
            y: self.origin.y - self.elapsed * FLOAT_SPEED,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_healing(&self) -> bool {
        self.healing
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_fades_linearly() {
        let mut effect = DamageEffect::new(Vec2::ZERO, 6, 2.0, false);
        assert_eq!(effect.alpha(), 1.0);
        effect.advance(1.0);
        assert!((effect.alpha() - 0.5).abs() < 1e-6);
        effect.advance(1.0);
        assert_eq!(effect.alpha(), 0.0);
        assert!(effect.is_finished());
    }

    #[test]
    fn position_drifts_upward() {
        let mut effect = DamageEffect::new(Vec2::new(100.0, 200.0), 6, 2.0, false);
        effect.advance(0.5);
        let pos = effect.position();
        assert_eq!(pos.x, 100.0);
        assert_eq!(pos.y, 200.0 - 15.0);
    }

    #[test]
    fn finishes_exactly_at_duration() {
        let mut effect = DamageEffect::new(Vec2::ZERO, 10, 1.5, true);
        effect.advance(1.4);
        assert!(!effect.is_finished());
        effect.advance(0.1);
        assert!(effect.is_finished());
    }
}
