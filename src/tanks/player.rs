use crate::entities::Tank;
use crate::input::Controls;
use crate::math::{heading_vec, vec2, vec2_add, vec2_length_sqr, vec2_normalize, vec2_scale, vec2_sub};

/// Intent-driven steering: rotation applies regardless of movement, and
/// opposite movement intents cancel. Motion is instantaneous velocity, no
/// acceleration model.
pub(super) fn steer(tank: &mut Tank, dt: f32, controls: &Controls) {
    let mut movement = vec2(0.0, 0.0);
    if controls.forward {
        movement = vec2_add(movement, heading_vec(tank.heading));
    }
    if controls.backward {
        movement = vec2_sub(movement, heading_vec(tank.heading));
    }

    if controls.turn_left {
        tank.heading -= tank.rotation_speed * dt;
    }
    if controls.turn_right {
        tank.heading += tank.rotation_speed * dt;
    }

    if vec2_length_sqr(movement) > 0.0 {
        let step = vec2_scale(vec2_normalize(movement), tank.speed * dt);
        tank.position = vec2_add(tank.position, step);
    }
}
