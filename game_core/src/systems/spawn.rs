use hecs::World;
use log::debug;

use crate::{create_pipe, Config, Events, Field, GameRng, Pipe};

/// Spawn pipes at the right until at least `min_pipes` exist.
///
/// Each new pipe goes one `pipe_spacing` beyond the rightmost pipe, or beyond
/// the field's right edge when every pipe is already inside the field.
pub fn spawn_pipes(
    world: &mut World,
    field: &Field,
    config: &Config,
    next_seq: &mut u32,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let mut count = 0;
    let mut rightmost = f32::NEG_INFINITY;
    for (_e, pipe) in world.query::<&Pipe>().iter() {
        count += 1;
        rightmost = rightmost.max(pipe.x);
    }

    let (gap_lo, gap_hi) = config.gap_top_range();
    while count < config.min_pipes {
        let x = rightmost.max(field.width) + config.pipe_spacing;
        let gap_top = rng.range(gap_lo, gap_hi);
        create_pipe(world, *next_seq, x, gap_top);
        debug!("spawned pipe {} at x={x:.1} gap_top={gap_top:.1}", *next_seq);

        *next_seq += 1;
        rightmost = x;
        count += 1;
        events.pipes_spawned += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipes_by_seq(world: &World) -> Vec<Pipe> {
        let mut pipes: Vec<Pipe> = world.query::<&Pipe>().iter().map(|(_e, p)| *p).collect();
        pipes.sort_by_key(|p| p.seq);
        pipes
    }

    #[test]
    fn test_seed_empty_world() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let mut rng = GameRng::new(7);
        let mut events = Events::new();
        let mut seq = 0;

        spawn_pipes(&mut world, &field, &config, &mut seq, &mut rng, &mut events);

        let pipes = pipes_by_seq(&world);
        assert_eq!(pipes.len(), config.min_pipes);
        assert_eq!(seq, config.min_pipes as u32);
        for (i, pipe) in pipes.iter().enumerate() {
            let expected = field.width + config.pipe_spacing * (i as f32 + 1.0);
            assert_eq!(pipe.x, expected);
            let (lo, hi) = config.gap_top_range();
            assert!(pipe.gap_top >= lo && pipe.gap_top <= hi);
        }
    }

    #[test]
    fn test_spawn_after_rightmost_beyond_field() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let mut rng = GameRng::new(7);
        let mut events = Events::new();
        let mut seq = 2;
        create_pipe(&mut world, 0, 600.0, 100.0);
        create_pipe(&mut world, 1, 900.0, 100.0);

        spawn_pipes(&mut world, &field, &config, &mut seq, &mut rng, &mut events);

        let pipes = pipes_by_seq(&world);
        assert_eq!(pipes.len(), 3);
        assert_eq!(pipes[2].x, 900.0 + config.pipe_spacing);
        assert_eq!(events.pipes_spawned, 1);
    }

    #[test]
    fn test_spawn_uses_field_edge_when_pipes_inside() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let mut rng = GameRng::new(7);
        let mut events = Events::new();
        let mut seq = 2;
        create_pipe(&mut world, 0, 100.0, 100.0);
        create_pipe(&mut world, 1, 400.0, 100.0);

        spawn_pipes(&mut world, &field, &config, &mut seq, &mut rng, &mut events);

        let pipes = pipes_by_seq(&world);
        assert_eq!(pipes[2].x, field.width + config.pipe_spacing);
    }

    #[test]
    fn test_no_spawn_when_enough_pipes() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let mut rng = GameRng::new(7);
        let mut events = Events::new();
        let mut seq = 3;
        for i in 0..3 {
            create_pipe(&mut world, i, 100.0 * i as f32, 100.0);
        }

        spawn_pipes(&mut world, &field, &config, &mut seq, &mut rng, &mut events);

        assert_eq!(events.pipes_spawned, 0);
        assert_eq!(seq, 3);
    }
}
