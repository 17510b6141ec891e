use crate::params::Params;

/// Time resource for fixed-step simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64,        // Ticks simulated so far
    pub accumulator: f32, // Frame time not yet consumed by a tick
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add frame time and return how many whole ticks are due
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, Params::MAX_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut due = 0;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            due += 1;
        }
        due
    }

    /// Drop leftover frame time, e.g. when ticking pauses
    pub fn discard_remainder(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Current and best score
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub current: u32,
    pub high: u32,
}

impl Score {
    pub fn new(high: u32) -> Self {
        Self { current: 0, high }
    }

    pub fn increment(&mut self) {
        self.current += 1;
    }

    pub fn is_new_high(&self) -> bool {
        self.current > self.high
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform draw from `[lo, hi]`; a collapsed range returns `lo`
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        use rand::Rng;
        if hi > lo {
            self.0.gen_range(lo..=hi)
        } else {
            lo
        }
    }

    /// Uniform index below `len`, which must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.0.gen_range(0..len)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub jumped: bool,
    pub scored: u32,
    pub hit_pipe: bool,
    pub out_of_bounds: bool,
    pub pipes_spawned: u32,
    pub pipes_removed: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The bird hit something this tick
    pub fn crashed(&self) -> bool {
        self.hit_pipe || self.out_of_bounds
    }
}

/// Pending jump input. Holds at most one jump between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputQueue {
    jump: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_jump(&mut self) {
        self.jump = true;
    }

    pub fn is_pending(&self) -> bool {
        self.jump
    }

    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }

    pub fn clear(&mut self) {
        self.jump = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_accumulates_whole_ticks() {
        let mut time = Time::new();
        assert_eq!(time.accumulate(Params::FIXED_DT * 0.5), 0);
        assert_eq!(time.accumulate(Params::FIXED_DT * 0.6), 1);
        assert!(time.accumulator < Params::FIXED_DT);
    }

    #[test]
    fn test_time_clamps_large_frames() {
        let mut time = Time::new();
        let due = time.accumulate(5.0);
        let max_due = (Params::MAX_DT / Params::FIXED_DT).ceil() as u32;
        assert!(due <= max_due, "Long frames are clamped, got {due} ticks");
    }

    #[test]
    fn test_time_ignores_bad_frames() {
        let mut time = Time::new();
        assert_eq!(time.accumulate(-1.0), 0);
        assert_eq!(time.accumulate(f32::NAN), 0);
        assert_eq!(time.accumulator, 0.0);
    }

    #[test]
    fn test_score_new_high() {
        let mut score = Score::new(1);
        assert!(!score.is_new_high());
        score.increment();
        assert!(!score.is_new_high(), "Equal to the high score is not a new high");
        score.increment();
        assert!(score.is_new_high());
    }

    #[test]
    fn test_input_queue_latches_one_jump() {
        let mut queue = InputQueue::new();
        queue.push_jump();
        queue.push_jump();
        assert!(queue.take_jump());
        assert!(!queue.take_jump(), "Repeated pushes collapse into one jump");
    }

    #[test]
    fn test_rng_range_collapsed() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.range(5.0, 5.0), 5.0);
        assert_eq!(rng.range(5.0, 1.0), 5.0);
        let v = rng.range(1.0, 2.0);
        assert!((1.0..=2.0).contains(&v));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.hit_pipe = true;
        events.scored = 2;
        assert!(events.crashed());
        events.clear();
        assert!(!events.crashed());
        assert_eq!(events.scored, 0);
    }
}
