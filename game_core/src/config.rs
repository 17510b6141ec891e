use serde::Deserialize;

use crate::params::Params;

/// Game configuration
///
/// Every field defaults to its [`Params`] value, so a partial JSON object
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub bird_size: f32,
    pub bird_start_y: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_rise_velocity: f32,
    pub max_fall_velocity: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_spacing: f32,
    pub gap_margin: f32,
    pub min_pipes: usize,
    /// Keep the running score when a correct answer revives the bird
    pub revive_keeps_score: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            bird_size: Params::BIRD_SIZE,
            bird_start_y: Params::BIRD_START_Y,
            gravity: Params::GRAVITY,
            jump_impulse: Params::JUMP_IMPULSE,
            max_rise_velocity: Params::MAX_RISE_VELOCITY,
            max_fall_velocity: Params::MAX_FALL_VELOCITY,
            pipe_width: Params::PIPE_WIDTH,
            pipe_gap: Params::PIPE_GAP,
            pipe_speed: Params::PIPE_SPEED,
            pipe_spacing: Params::PIPE_SPACING,
            gap_margin: Params::GAP_MARGIN,
            min_pipes: Params::MIN_PIPES,
            revive_keeps_score: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest valid bird Y (top of the field)
    pub fn bird_min_y(&self) -> f32 {
        0.0
    }

    /// Highest valid bird Y (bird resting on the floor)
    pub fn bird_max_y(&self) -> f32 {
        self.field_height - self.bird_size
    }

    /// Range the gap-top offset is drawn from
    pub fn gap_top_range(&self) -> (f32, f32) {
        let lo = self.gap_margin;
        let hi = (self.field_height - self.pipe_gap - self.gap_margin).max(lo);
        (lo, hi)
    }

    /// Apply a jump impulse to a vertical velocity.
    ///
    /// Downward momentum is cancelled first; the result never rises faster
    /// than `max_rise_velocity`.
    pub fn jump_velocity(&self, vel: f32) -> f32 {
        (vel.min(0.0) + self.jump_impulse).max(self.max_rise_velocity)
    }

    /// Apply one tick of gravity, capped at `max_fall_velocity`
    pub fn fall_velocity(&self, vel: f32) -> f32 {
        (vel + self.gravity).min(self.max_fall_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_bird_bounds() {
        let config = Config::new();
        assert_eq!(config.bird_min_y(), 0.0);
        assert_eq!(config.bird_max_y(), 550.0);
    }

    #[test]
    fn test_gap_top_range() {
        let config = Config::new();
        assert_eq!(config.gap_top_range(), (50.0, 350.0));
    }

    #[test]
    fn test_gap_top_range_degenerate_field() {
        let config = Config {
            field_height: 250.0,
            ..Config::default()
        };
        let (lo, hi) = config.gap_top_range();
        assert_eq!(lo, hi, "Range collapses instead of inverting");
    }

    #[test]
    fn test_jump_cancels_fall_and_clamps() {
        let config = Config::new();
        assert_eq!(config.jump_velocity(10.0), config.jump_impulse);
        assert_eq!(config.jump_velocity(-5.0), config.max_rise_velocity);
        assert_eq!(
            config.jump_velocity(config.max_rise_velocity),
            config.max_rise_velocity
        );
    }

    #[test]
    fn test_fall_velocity_caps() {
        let config = Config::new();
        assert_eq!(config.fall_velocity(0.0), config.gravity);
        assert_eq!(
            config.fall_velocity(config.max_fall_velocity),
            config.max_fall_velocity
        );
    }

    #[test]
    fn test_partial_json_override() {
        let config: Config =
            serde_json::from_str(r#"{ "gravity": 0.6, "revive_keeps_score": false }"#)
                .expect("Config should parse");
        assert_eq!(config.gravity, 0.6);
        assert!(!config.revive_keeps_score);
        assert_eq!(config.pipe_width, Params::PIPE_WIDTH, "Unset fields keep defaults");
    }
}
