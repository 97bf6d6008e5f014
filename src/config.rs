use raylib::prelude::Color;

pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 720.0;
pub const TARGET_FPS: u32 = 60;

pub const TILE_SIZE: f32 = 48.0;
pub const GRID_WIDTH: i32 = (SCREEN_WIDTH / TILE_SIZE) as i32;
pub const GRID_HEIGHT: i32 = (SCREEN_HEIGHT / TILE_SIZE) as i32;

pub const PLAYER_SPEED: f32 = 180.0;
pub const PLAYER_ROTATION_SPEED: f32 = 180.0;
pub const ENEMY_SPEED: f32 = 120.0;
pub const ENEMY_ROTATION_SPEED: f32 = 120.0;
pub const SHELL_SPEED: f32 = 400.0;
pub const SHELL_COOLDOWN: f32 = 0.6;
pub const SHELL_RADIUS: f32 = 6.0;
pub const TANK_SIZE: f32 = 36.0;

pub const WALL_DENSITY: f64 = 0.12;
pub const SPAWN_SAFE_RADIUS: i32 = 2;

pub const LEVEL_BASE_ENEMIES: f32 = 2.0;
pub const LEVEL_ENEMY_SCALE: f32 = 1.25;

pub const BACKGROUND_COLOR: Color = Color::new(25, 30, 40, 255);
pub const WALL_COLOR: Color = Color::new(110, 110, 110, 255);
pub const PLAYER_COLOR: Color = Color::new(80, 200, 120, 255);
pub const ENEMY_COLOR: Color = Color::new(200, 80, 80, 255);
pub const SHELL_COLOR: Color = Color::new(250, 230, 100, 255);
pub const TEXT_COLOR: Color = Color::new(235, 235, 235, 255);
