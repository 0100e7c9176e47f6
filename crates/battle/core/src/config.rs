/// Battle system configuration: tunable parameters fed to the runtime.
///
/// Read-only input; the owning scene constructs one and hands it to the
/// battle manager.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Capacity of the bounded action queue. Enqueues beyond this are
    /// dropped rather than blocking the scheduler.
    pub action_queue_capacity: usize,
    /// Global charge-rate multiplier applied on top of each timer's own
    /// rate. 0.33 means a default timer fills in roughly three seconds.
    pub timer_charge_rate: f64,
    /// Default action animation duration in seconds.
    pub animation_duration: f64,
    /// How long floating damage/heal numbers stay visible, in seconds.
    pub damage_effect_duration: f64,
}

impl BattleConfig {
    pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
    pub const DEFAULT_TIMER_CHARGE_RATE: f64 = 0.33;
    pub const DEFAULT_ANIMATION_DURATION: f64 = 1.0;
    pub const DEFAULT_DAMAGE_EFFECT_DURATION: f64 = 2.0;

    pub fn new() -> Self {
        Self {
            action_queue_capacity: Self::DEFAULT_QUEUE_CAPACITY,
            timer_charge_rate: Self::DEFAULT_TIMER_CHARGE_RATE,
            animation_duration: Self::DEFAULT_ANIMATION_DURATION,
            damage_effect_duration: Self::DEFAULT_DAMAGE_EFFECT_DURATION,
        }
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.action_queue_capacity = capacity;
        self
    }

    pub fn with_timer_charge_rate(mut self, rate: f64) -> Self {
        self.timer_charge_rate = rate;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
