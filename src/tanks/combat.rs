use raylib::prelude::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, SHELL_RADIUS, SHELL_SPEED};
use crate::entities::{Shell, Tank};
use crate::math::{heading_vec, rect_contains_point, vec2_add, vec2_scale};

/// Spawns a shell half a hull-width ahead of the tank's center and resets the
/// reload timer. No-op while reloading or dead.
pub fn fire(tank: &mut Tank) {
    if tank.reload_time > 0.0 || !tank.alive {
        return;
    }
    let direction = heading_vec(tank.heading);
    tank.shells.push(Shell {
        position: vec2_add(tank.position, vec2_scale(direction, tank.size.x * 0.5)),
        velocity: vec2_scale(direction, SHELL_SPEED),
        owner: tank.id,
        radius: SHELL_RADIUS,
        alive: true,
    });
    tank.reload_time = tank.cooldown;
}

/// Euler step, then a point hit test against the walls and the arena bounds.
/// A fast shell can skip past a thin wall in one step; that tunneling is
/// accepted rather than swept-tested.
pub(super) fn update_shell(shell: &mut Shell, dt: f32, walls: &[Rectangle]) {
    if !shell.alive {
        return;
    }

    shell.position = vec2_add(shell.position, vec2_scale(shell.velocity, dt));
    for wall in walls {
        if rect_contains_point(wall, shell.position) {
            shell.alive = false;
            break;
        }
    }

    if shell.position.x < 0.0
        || shell.position.x > SCREEN_WIDTH
        || shell.position.y < 0.0
        || shell.position.y > SCREEN_HEIGHT
    {
        shell.alive = false;
    }
}
