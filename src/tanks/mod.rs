mod ai;
mod combat;
mod movement;
mod player;

use raylib::prelude::{Rectangle, Vector2};

use crate::entities::{ControlMode, Tank};
use crate::input::Controls;

pub use combat::fire;

/// Advances one tank for the frame: reload clamp, steering for its control
/// mode, wall resolution, then its shells. Dead tanks skip everything except
/// their in-flight shells, which keep resolving until naturally destroyed.
pub fn update_tank(
    tank: &mut Tank,
    dt: f32,
    controls: &Controls,
    player_pos: Vector2,
    walls: &[Rectangle],
) {
    if tank.alive {
        tank.reload_time = (tank.reload_time - dt).clamp(0.0, tank.cooldown);
        match tank.mode {
            ControlMode::Player => player::steer(tank, dt, controls),
            ControlMode::Pursuit => ai::pursue(tank, dt, player_pos),
        }
        movement::resolve_wall_collisions(tank, walls);
    }

    for shell in &mut tank.shells {
        combat::update_shell(shell, dt, walls);
    }
    tank.shells.retain(|shell| shell.alive);
}
