use hecs::World;

use crate::{Config, Events, Pipe};

/// Despawn pipes whose trailing edge has left the field
pub fn despawn_offscreen_pipes(world: &mut World, config: &Config, events: &mut Events) {
    let to_remove: Vec<_> = world
        .query::<&Pipe>()
        .iter()
        .filter(|(_e, pipe)| pipe.is_offscreen(config.pipe_width))
        .map(|(e, _)| e)
        .collect();

    for entity in to_remove {
        if world.despawn(entity).is_ok() {
            events.pipes_removed += 1;
        }
    }
}
