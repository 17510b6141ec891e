use hecs::World;

use crate::{Config, Events, Field, Pipe, Score};

/// Award a point for every pipe the bird has cleared.
///
/// A pipe is cleared once its right edge is at or behind the bird's left
/// edge, however far it travelled this tick and wherever a resize put the
/// bird. The `scored` flag keeps a pipe from paying out twice.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let bird_left = field.bird_x(config);

    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        if pipe.scored {
            continue;
        }

        if pipe.right(config.pipe_width) <= bird_left {
            pipe.scored = true;
            score.increment();
            events.scored += 1;
        }
    }
}
