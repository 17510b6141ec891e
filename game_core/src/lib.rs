pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod game;
pub mod params;
pub mod questions;
pub mod quiz;
pub mod resources;
pub mod schedule;
pub mod snapshot;
pub mod storage;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use questions::*;
pub use quiz::*;
pub use resources::*;
pub use schedule::*;
pub use snapshot::*;
pub use storage::*;

use hecs::World;
use systems::*;

/// Run one deterministic Flappy Learn tick
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
    next_pipe_seq: &mut u32,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest the latched jump
    ingest_jump(world, input, config, events);

    // 2. Gravity and bird movement; leaving the field ends the tick
    move_bird(world, config, events);
    if events.out_of_bounds {
        return;
    }

    // 3. Scroll pipes and drop the ones that left the field
    move_pipes(world, config);
    despawn_offscreen_pipes(world, config, events);

    // 4. Keep the minimum number of pipes queued up
    spawn_pipes(world, field, config, next_pipe_seq, rng, events);

    // 5. Check collisions; a hit ends the tick
    check_collisions(world, field, config, events);
    if events.hit_pipe {
        return;
    }

    // 6. Award points for pipes cleared this tick
    check_scoring(world, field, config, score, events);
}

/// Helper to create the bird entity
pub fn create_bird(world: &mut World, y: f32) -> hecs::Entity {
    world.spawn((Bird::new(y),))
}

/// Helper to create a pipe entity
pub fn create_pipe(world: &mut World, seq: u32, x: f32, gap_top: f32) -> hecs::Entity {
    world.spawn((Pipe::new(seq, x, gap_top),))
}
