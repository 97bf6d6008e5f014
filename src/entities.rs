use raylib::prelude::{Color, Rectangle, Vector2};

use crate::config::{
    ENEMY_COLOR, ENEMY_ROTATION_SPEED, ENEMY_SPEED, PLAYER_COLOR, PLAYER_ROTATION_SPEED,
    PLAYER_SPEED, SHELL_COOLDOWN, TANK_SIZE,
};
use crate::math::vec2;

/// Stable per-level tank identity, used by shells as a non-owning
/// back-reference for self-hit exclusion.
pub type TankId = u32;

pub const PLAYER_ID: TankId = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
    Player,
    Pursuit,
}

#[derive(Clone, Debug)]
pub struct Shell {
    pub position: Vector2,
    pub velocity: Vector2,
    pub owner: TankId,
    pub radius: f32,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct Tank {
    pub id: TankId,
    pub position: Vector2,
    /// Heading in degrees. Left unnormalized; only its direction vector
    /// matters.
    pub heading: f32,
    pub color: Color,
    pub speed: f32,
    pub rotation_speed: f32,
    pub mode: ControlMode,
    pub reload_time: f32,
    pub cooldown: f32,
    pub shells: Vec<Shell>,
    pub size: Vector2,
    pub alive: bool,
}

impl Tank {
    pub fn player(position: Vector2) -> Self {
        Tank {
            id: PLAYER_ID,
            position,
            heading: -90.0,
            color: PLAYER_COLOR,
            speed: PLAYER_SPEED,
            rotation_speed: PLAYER_ROTATION_SPEED,
            mode: ControlMode::Player,
            reload_time: 0.0,
            cooldown: SHELL_COOLDOWN,
            shells: Vec::new(),
            size: vec2(TANK_SIZE, TANK_SIZE),
            alive: true,
        }
    }

    pub fn enemy(id: TankId, position: Vector2) -> Self {
        Tank {
            id,
            position,
            heading: 90.0,
            color: ENEMY_COLOR,
            speed: ENEMY_SPEED,
            rotation_speed: ENEMY_ROTATION_SPEED,
            mode: ControlMode::Pursuit,
            reload_time: 0.0,
            cooldown: SHELL_COOLDOWN,
            shells: Vec::new(),
            size: vec2(TANK_SIZE, TANK_SIZE),
            alive: true,
        }
    }

    /// Axis-aligned bounding rectangle centered on the tank, or `None` for a
    /// dead or zero-sized tank. Callers must check before any collision test.
    pub fn bounding_rect(&self) -> Option<Rectangle> {
        if self.size.x == 0.0 || self.size.y == 0.0 || !self.alive {
            return None;
        }
        Some(Rectangle {
            x: self.position.x - self.size.x * 0.5,
            y: self.position.y - self.size.y * 0.5,
            width: self.size.x,
            height: self.size.y,
        })
    }
}
