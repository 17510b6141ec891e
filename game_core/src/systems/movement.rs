use hecs::World;

use crate::{Bird, Config, Events, Pipe};

/// Apply gravity and integrate the bird.
///
/// A bird that leaves the field is clamped back to the edge and flagged
/// `out_of_bounds`.
pub fn move_bird(world: &mut World, config: &Config, events: &mut Events) {
    let (min_y, max_y) = (config.bird_min_y(), config.bird_max_y());

    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.vel = config.fall_velocity(bird.vel);
        let next = bird.y + bird.vel;

        if next < min_y || next > max_y {
            bird.y = next.clamp(min_y, max_y);
            events.out_of_bounds = true;
        } else {
            bird.y = next;
        }
    }
}

/// Scroll every pipe left by one tick's travel
pub fn move_pipes(world: &mut World, config: &Config) {
    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        pipe.x -= config.pipe_speed;
    }
}
