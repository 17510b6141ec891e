//! Read-only view of the simulation for rendering

use glam::Vec2;

use crate::{Aabb, Bird, Config, Field, Params, Pipe, SessionState};

/// Rectangles for one pipe pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeView {
    pub top: Aabb,
    pub bottom: Aabb,
}

impl PipeView {
    pub fn new(pipe: &Pipe, field: &Field, config: &Config) -> Self {
        let gap_bottom = pipe.gap_bottom(config.pipe_gap);
        Self {
            top: Aabb::new(
                Vec2::new(pipe.x, 0.0),
                Vec2::new(pipe.right(config.pipe_width), pipe.gap_top),
            ),
            bottom: Aabb::new(
                Vec2::new(pipe.x, gap_bottom),
                Vec2::new(pipe.right(config.pipe_width), field.height.max(gap_bottom)),
            ),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: SessionState,
    pub field: Field,
    pub bird: Aabb,
    pub bird_rotation_deg: f32,
    pub pipes: Vec<PipeView>, // Oldest (leftmost) first
    pub score: u32,
    pub high_score: u32,
}

/// Bird tilt in degrees: nose up when rising, nose down when falling, and
/// straight down once crashed.
pub fn bird_rotation(vel: f32, crashed: bool) -> f32 {
    if crashed {
        return Params::MAX_ROTATION_DEG;
    }
    (vel * Params::ROTATION_PER_VELOCITY).clamp(Params::MIN_ROTATION_DEG, Params::MAX_ROTATION_DEG)
}

impl Snapshot {
    pub fn new(
        state: SessionState,
        field: &Field,
        config: &Config,
        bird: &Bird,
        pipes: &[Pipe],
        score: u32,
        high_score: u32,
    ) -> Self {
        let crashed = matches!(state, SessionState::AwaitingAnswer | SessionState::Over);
        Self {
            state,
            field: *field,
            bird: field.bird_box(bird.y, config),
            bird_rotation_deg: bird_rotation(bird.vel, crashed),
            pipes: pipes
                .iter()
                .map(|pipe| PipeView::new(pipe, field, config))
                .collect(),
            score,
            high_score,
        }
    }
}
