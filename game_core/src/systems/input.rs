use hecs::World;

use crate::{Bird, Config, Events, InputQueue};

/// Apply the latched jump, if any, to the bird
pub fn ingest_jump(world: &mut World, input: &mut InputQueue, config: &Config, events: &mut Events) {
    if !input.take_jump() {
        return;
    }

    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.vel = config.jump_velocity(bird.vel);
        events.jumped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_bird;

    #[test]
    fn test_jump_applies_once() {
        let mut world = World::new();
        let config = Config::new();
        let mut input = InputQueue::new();
        let mut events = Events::new();
        let bird = create_bird(&mut world, 200.0);

        input.push_jump();
        ingest_jump(&mut world, &mut input, &config, &mut events);
        assert!(events.jumped);
        assert_eq!(world.get::<&Bird>(bird).unwrap().vel, config.jump_impulse);

        events.clear();
        ingest_jump(&mut world, &mut input, &config, &mut events);
        assert!(!events.jumped, "Latch is consumed by the first tick");
    }

    #[test]
    fn test_stacked_jumps_respect_rise_clamp() {
        let mut world = World::new();
        let config = Config::new();
        let mut input = InputQueue::new();
        let mut events = Events::new();
        let bird = create_bird(&mut world, 200.0);

        for _ in 0..10 {
            input.push_jump();
            ingest_jump(&mut world, &mut input, &config, &mut events);
            let vel = world.get::<&Bird>(bird).unwrap().vel;
            assert!(vel >= config.max_rise_velocity, "Velocity {vel} past clamp");
        }
    }

    #[test]
    fn test_no_jump_leaves_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let mut input = InputQueue::new();
        let mut events = Events::new();
        let bird = create_bird(&mut world, 200.0);

        ingest_jump(&mut world, &mut input, &config, &mut events);
        assert_eq!(world.get::<&Bird>(bird).unwrap().vel, 0.0);
    }
}
