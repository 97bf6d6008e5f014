use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use raylib::prelude::{Rectangle, Vector2};

use crate::config::{
    GRID_HEIGHT, GRID_WIDTH, LEVEL_BASE_ENEMIES, LEVEL_ENEMY_SCALE, SPAWN_SAFE_RADIUS, TILE_SIZE,
    WALL_DENSITY,
};
use crate::entities::Tank;
use crate::math::{rects_overlap, vec2};

const PLACEMENT_ATTEMPTS: usize = 100;

fn tile_rect(x: i32, y: i32) -> Rectangle {
    Rectangle {
        x: x as f32 * TILE_SIZE,
        y: y as f32 * TILE_SIZE,
        width: TILE_SIZE,
        height: TILE_SIZE,
    }
}

/// Builds the wall set for a level. The RNG is seeded by the level number
/// alone, so the same number always yields the same layout: random interior
/// tiles at `WALL_DENSITY`, the full border ring forced to wall, then the
/// player's spawn neighborhood carved clear.
pub(super) fn generate_walls(number: u32, spawn: Vector2) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(number as u64);
    let mut walls = Vec::new();

    for y in 1..GRID_HEIGHT - 1 {
        for x in 0..GRID_WIDTH {
            if rng.random_range(0.0..1.0) < WALL_DENSITY {
                walls.push(tile_rect(x, y));
            }
        }
    }

    for x in 0..GRID_WIDTH {
        walls.push(tile_rect(x, 0));
        walls.push(tile_rect(x, GRID_HEIGHT - 1));
    }
    for y in 0..GRID_HEIGHT {
        walls.push(tile_rect(0, y));
        walls.push(tile_rect(GRID_WIDTH - 1, y));
    }

    carve_spawn_clearing(&mut walls, spawn);
    walls
}

/// Removes walls within a Chebyshev radius of the spawn tile. Border tiles
/// stay wall even inside the radius.
fn carve_spawn_clearing(walls: &mut Vec<Rectangle>, spawn: Vector2) {
    let spawn_tx = (spawn.x / TILE_SIZE) as i32;
    let spawn_ty = (spawn.y / TILE_SIZE) as i32;
    walls.retain(|wall| {
        let tx = (wall.x / TILE_SIZE) as i32;
        let ty = (wall.y / TILE_SIZE) as i32;
        if tx == 0 || tx == GRID_WIDTH - 1 || ty == 0 || ty == GRID_HEIGHT - 1 {
            return true;
        }
        (tx - spawn_tx).abs() > SPAWN_SAFE_RADIUS || (ty - spawn_ty).abs() > SPAWN_SAFE_RADIUS
    });
}

/// Difficulty step function: floor(BASE + (n - 1) * SCALE).
pub fn enemy_count(number: u32) -> usize {
    (LEVEL_BASE_ENEMIES + (number - 1) as f32 * LEVEL_ENEMY_SCALE) as usize
}

/// Places enemies in the upper half of the arena, best effort. Each slot gets
/// up to `PLACEMENT_ATTEMPTS` random tile-centered candidates; a candidate is
/// rejected if a one-tile clearance square overlaps any wall. A slot that
/// exhausts its attempts simply produces no enemy. The RNG stream is
/// independent of the map stream.
pub(super) fn place_enemies(number: u32, walls: &[Rectangle]) -> Vec<Tank> {
    let mut rng = SmallRng::seed_from_u64(number as u64 * 31 + 7);
    let mut enemies = Vec::new();

    for slot in 0..enemy_count(number) {
        let mut placed = false;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let tx = rng.random_range(1..=GRID_WIDTH - 2);
            let ty = rng.random_range(1..=GRID_HEIGHT / 2);
            let position = vec2(
                tx as f32 * TILE_SIZE + TILE_SIZE * 0.5,
                ty as f32 * TILE_SIZE + TILE_SIZE * 0.5,
            );
            let clearance = Rectangle {
                x: position.x - TILE_SIZE * 0.5,
                y: position.y - TILE_SIZE * 0.5,
                width: TILE_SIZE,
                height: TILE_SIZE,
            };
            if walls.iter().any(|wall| rects_overlap(&clearance, wall)) {
                continue;
            }
            enemies.push(Tank::enemy(1 + enemies.len() as u32, position));
            placed = true;
            break;
        }
        if !placed {
            debug!("level {number}: no open tile for enemy slot {slot}");
        }
    }

    enemies
}
