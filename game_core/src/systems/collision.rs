use hecs::World;
use glam::Vec2;

use crate::{Aabb, Bird, Config, Events, Field, Pipe};

/// Does the bird box hit this pipe pair?
///
/// Horizontal overlap is strict, and so is the vertical test: a bird whose top
/// edge sits exactly on the gap top (or bottom edge exactly on the gap bottom)
/// passes cleanly.
pub fn bird_hits_pipe(bird: &Aabb, pipe: &Pipe, config: &Config) -> bool {
    let pipe_box = Aabb::from_min_size(
        Vec2::new(pipe.x, 0.0),
        Vec2::new(config.pipe_width, config.field_height),
    );
    if !bird.overlaps_x(&pipe_box) {
        return false;
    }

    bird.min.y < pipe.gap_top || bird.max.y > pipe.gap_bottom(config.pipe_gap)
}

/// Check the bird against every pipe; stops at the first hit
pub fn check_collisions(world: &World, field: &Field, config: &Config, events: &mut Events) {
    let bird_y = match world.query::<&Bird>().iter().next().map(|(_e, b)| b.y) {
        Some(y) => y,
        None => return, // No bird in world
    };
    let bird_box = field.bird_box(bird_y, config);

    events.hit_pipe = world
        .query::<&Pipe>()
        .iter()
        .any(|(_e, pipe)| bird_hits_pipe(&bird_box, pipe, config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_bird, create_pipe};

    fn bird_at(x: f32, y: f32, config: &Config) -> Aabb {
        Aabb::from_min_size(Vec2::new(x, y), Vec2::splat(config.bird_size))
    }

    #[test]
    fn test_bird_in_gap_is_safe() {
        let config = Config::new();
        let pipe = Pipe::new(0, 100.0, 100.0);
        let bird = bird_at(110.0, 150.0, &config);
        assert!(!bird_hits_pipe(&bird, &pipe, &config));
    }

    #[test]
    fn test_top_edge_boundary() {
        let config = Config::new();
        let pipe = Pipe::new(0, 100.0, 100.0);
        assert!(
            !bird_hits_pipe(&bird_at(110.0, 100.0, &config), &pipe, &config),
            "Top edge exactly on gap top is not a collision"
        );
        assert!(bird_hits_pipe(&bird_at(110.0, 99.9, &config), &pipe, &config));
    }

    #[test]
    fn test_bottom_edge_boundary() {
        let config = Config::new();
        let pipe = Pipe::new(0, 100.0, 100.0);
        let flush = pipe.gap_bottom(config.pipe_gap) - config.bird_size;
        assert!(
            !bird_hits_pipe(&bird_at(110.0, flush, &config), &pipe, &config),
            "Bottom edge exactly on gap bottom is not a collision"
        );
        assert!(bird_hits_pipe(&bird_at(110.0, flush + 0.1, &config), &pipe, &config));
    }

    #[test]
    fn test_left_edge_boundary() {
        let config = Config::new();
        let pipe = Pipe::new(0, 100.0, 300.0);
        // Bird far above the gap, so only the horizontal test decides
        let touching = bird_at(100.0 - config.bird_size, 0.0, &config);
        assert!(!bird_hits_pipe(&touching, &pipe, &config));
        let inside = bird_at(100.0 - config.bird_size + 0.1, 0.0, &config);
        assert!(bird_hits_pipe(&inside, &pipe, &config));
    }

    #[test]
    fn test_right_edge_boundary() {
        let config = Config::new();
        let pipe = Pipe::new(0, 100.0, 300.0);
        let touching = bird_at(100.0 + config.pipe_width, 0.0, &config);
        assert!(!bird_hits_pipe(&touching, &pipe, &config));
        let inside = bird_at(100.0 + config.pipe_width - 0.1, 0.0, &config);
        assert!(bird_hits_pipe(&inside, &pipe, &config));
    }

    #[test]
    fn test_check_collisions_flags_hit() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let mut events = Events::new();
        create_bird(&mut world, 10.0);
        create_pipe(&mut world, 0, field.bird_x(&config), 200.0);

        check_collisions(&world, &field, &config, &mut events);
        assert!(events.hit_pipe);
    }

    #[test]
    fn test_check_collisions_clear_path() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let mut events = Events::new();
        create_bird(&mut world, 200.0);
        create_pipe(&mut world, 0, field.bird_x(&config), 150.0);
        create_pipe(&mut world, 1, 1200.0, 50.0);

        check_collisions(&world, &field, &config, &mut events);
        assert!(!events.hit_pipe);
    }

    #[test]
    fn test_no_collision_when_no_bird() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let mut events = Events::new();
        create_pipe(&mut world, 0, 0.0, 0.0);

        check_collisions(&world, &field, &config, &mut events);
        assert!(!events.hit_pipe);
    }
}
