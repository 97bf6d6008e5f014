use raylib::prelude::Vector2;

use crate::config::{SCREEN_WIDTH, TILE_SIZE};
use crate::entities::Tank;
use crate::math::{heading_vec, vec2_add, vec2_heading, vec2_length, vec2_length_sqr, vec2_scale, vec2_sub, wrap_degrees};

use super::combat::fire;

/// Distance at which a pursuer stops closing in, in world units.
const HOLD_DISTANCE: f32 = TILE_SIZE * 1.5;
/// Pursuers open fire anywhere within one arena width of the player.
const FIRE_RANGE: f32 = SCREEN_WIDTH;

/// Direct pursuit: turn toward the player's current position (clamped so a
/// single frame never overshoots), advance while outside the hold distance,
/// and fire whenever in range with the reload elapsed. No obstacle avoidance
/// and no line-of-sight check.
pub(super) fn pursue(tank: &mut Tank, dt: f32, player_pos: Vector2) {
    let to_player = vec2_sub(player_pos, tank.position);
    if vec2_length_sqr(to_player) > 1.0 {
        let desired = vec2_heading(to_player);
        let delta = wrap_degrees(desired - tank.heading);
        let max_turn = tank.rotation_speed * dt;
        tank.heading += delta.clamp(-max_turn, max_turn);
    }

    let distance = vec2_length(to_player);
    if distance > HOLD_DISTANCE {
        let step = vec2_scale(heading_vec(tank.heading), tank.speed * dt);
        tank.position = vec2_add(tank.position, step);
    }

    if distance < FIRE_RANGE && tank.reload_time <= 0.0 {
        fire(tank);
    }
}
