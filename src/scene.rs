//! Default scene: a frame of thick capsules around the world rectangle, three
//! interior obstacles and one emitter.

use bevy::prelude::Vec2;

use crate::config::{CAPSULE_COLOR, CAPSULE_RADIUS, FRAME_RADIUS, WORLD_MAX, WORLD_MIN};
use crate::core::{Capsule, Emitter};

const OBSTACLES: [(Vec2, Vec2); 3] = [
    (Vec2::new(0.1, 0.8), Vec2::new(0.3, 0.5)),
    (Vec2::new(0.6, 0.0), Vec2::new(0.3, 0.3)),
    (Vec2::new(-0.5, -0.3), Vec2::new(0.2, 0.4)),
];

const EMITTER_POSITION: Vec2 = Vec2::new(-0.1, -0.15);

/// Frame first, then the interior obstacles, all in simulation space.
pub fn default_capsules() -> Vec<Capsule> {
    let frame = [
        (WORLD_MIN, Vec2::new(WORLD_MAX.x, WORLD_MIN.y)),
        (Vec2::new(WORLD_MIN.x * 0.7, WORLD_MAX.y), WORLD_MAX),
        (WORLD_MIN, Vec2::new(WORLD_MIN.x, WORLD_MAX.y)),
        (Vec2::new(WORLD_MAX.x, WORLD_MIN.y), WORLD_MAX),
    ];

    frame
        .into_iter()
        .map(|(p0, p1)| Capsule::from_world(p0, p1, FRAME_RADIUS, CAPSULE_COLOR))
        .chain(
            OBSTACLES
                .into_iter()
                .map(|(p0, p1)| Capsule::from_world(p0, p1, CAPSULE_RADIUS, CAPSULE_COLOR)),
        )
        .collect()
}

pub fn default_emitters() -> Vec<Emitter> {
    vec![Emitter::from_world(EMITTER_POSITION)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WORLD_SCALE;

    #[test]
    fn test_default_scene_is_scaled_once() {
        let capsules = default_capsules();
        let emitters = default_emitters();

        assert_eq!(capsules.len(), 7);
        assert_eq!(capsules[0].p0, WORLD_MIN * WORLD_SCALE);
        assert_eq!(capsules[0].radius, FRAME_RADIUS * WORLD_SCALE);
        assert_eq!(capsules[4].radius, CAPSULE_RADIUS * WORLD_SCALE);
        assert_eq!(emitters[0].position, EMITTER_POSITION * WORLD_SCALE);
    }

    #[test]
    fn test_emitter_starts_clear_of_obstacles() {
        let emitter = &default_emitters()[0];

        assert!(default_capsules().iter().all(|capsule| !capsule.contains(emitter.position)));
    }
}
