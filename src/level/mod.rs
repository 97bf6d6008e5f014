mod generation;

pub use generation::enemy_count;

use raylib::prelude::{Rectangle, Vector2};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};
use crate::entities::{Tank, TankId};
use crate::input::Controls;
use crate::math::{rect_contains_point, vec2};
use crate::tanks;

/// One arena: walls, the player, and the remaining enemies. Built once per
/// level and replaced wholesale on transition, never regenerated mid-level.
pub struct Level {
    pub number: u32,
    pub walls: Vec<Rectangle>,
    pub player: Tank,
    pub enemies: Vec<Tank>,
    pub player_destroyed: bool,
}

pub fn player_spawn() -> Vector2 {
    vec2(SCREEN_WIDTH * 0.5, SCREEN_HEIGHT - TILE_SIZE * 1.5)
}

impl Level {
    pub fn new(number: u32) -> Self {
        let player = Tank::player(player_spawn());
        let walls = generation::generate_walls(number, player.position);
        let enemies = generation::place_enemies(number, &walls);
        Level {
            number,
            walls,
            player,
            enemies,
            player_destroyed: false,
        }
    }

    /// Advances the whole level one frame. Update order is observable and
    /// fixed: player, then each enemy, then shell-vs-tank resolution, then
    /// pruning. Returns true when the level is cleared (no enemies left and
    /// the player alive).
    pub fn update(&mut self, dt: f32, controls: &Controls) -> bool {
        let player_pos = self.player.position;
        tanks::update_tank(&mut self.player, dt, controls, player_pos, &self.walls);

        let player_pos = self.player.position;
        for enemy in &mut self.enemies {
            tanks::update_tank(enemy, dt, controls, player_pos, &self.walls);
        }

        self.resolve_shell_hits();
        self.enemies.retain(|enemy| enemy.alive);
        self.player_destroyed = !self.player.alive;
        self.enemies.is_empty() && self.player.alive
    }

    /// All-pairs shell-vs-tank resolution. A shell never tests its owner,
    /// kills at most one tank (first match wins), and a tank struck earlier
    /// in the same pass stops absorbing later shells. Dead shells stay in
    /// their owner's collection until that tank's next update prunes them.
    fn resolve_shell_hits(&mut self) {
        let targets: Vec<(TankId, Option<Rectangle>)> = std::iter::once(&self.player)
            .chain(self.enemies.iter())
            .map(|tank| (tank.id, tank.bounding_rect()))
            .collect();
        let mut struck: Vec<TankId> = Vec::new();

        for holder in 0..=self.enemies.len() {
            let tank = if holder == 0 {
                &mut self.player
            } else {
                &mut self.enemies[holder - 1]
            };
            for shell in &mut tank.shells {
                if !shell.alive {
                    continue;
                }
                for (id, rect) in &targets {
                    if *id == shell.owner || struck.contains(id) {
                        continue;
                    }
                    if let Some(rect) = rect {
                        if rect_contains_point(rect, shell.position) {
                            shell.alive = false;
                            struck.push(*id);
                            break;
                        }
                    }
                }
            }
        }

        if struck.contains(&self.player.id) {
            self.player.alive = false;
        }
        for enemy in &mut self.enemies {
            if struck.contains(&enemy.id) {
                enemy.alive = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SHELL_RADIUS;
    use crate::entities::{Shell, PLAYER_ID};
    use crate::math::vec2;

    fn stationary_shell(owner: TankId, position: Vector2) -> Shell {
        Shell {
            position,
            velocity: vec2(0.0, 0.0),
            owner,
            radius: SHELL_RADIUS,
            alive: true,
        }
    }

    #[test]
    fn shell_never_strikes_its_owner() {
        let mut level = Level::new(1);
        let on_player = stationary_shell(PLAYER_ID, level.player.position);
        level.player.shells.push(on_player);
        level.resolve_shell_hits();
        assert!(level.player.alive);
        assert!(level.player.shells[0].alive);
    }

    #[test]
    fn enemy_shell_kills_the_player() {
        let mut level = Level::new(1);
        assert!(!level.enemies.is_empty());
        let owner = level.enemies[0].id;
        let shell = stationary_shell(owner, level.player.position);
        level.enemies[0].shells.push(shell);
        level.resolve_shell_hits();
        assert!(!level.player.alive);
        assert!(!level.enemies[0].shells[0].alive);
    }

    #[test]
    fn struck_tank_stops_absorbing_later_shells() {
        let mut level = Level::new(1);
        level.enemies.truncate(1);
        let target_pos = level.enemies[0].position;
        level.player.shells.push(stationary_shell(PLAYER_ID, target_pos));
        level.player.shells.push(stationary_shell(PLAYER_ID, target_pos));
        level.resolve_shell_hits();
        assert!(!level.enemies[0].alive);
        assert!(!level.player.shells[0].alive);
        assert!(level.player.shells[1].alive);
    }

    #[test]
    fn not_cleared_while_enemies_remain() {
        let mut level = Level::new(1);
        let idle = Controls::default();
        for _ in 0..10 {
            let cleared = level.update(1.0 / 60.0, &idle);
            assert!(!cleared);
            assert!(!level.enemies.is_empty());
        }
        assert!(level.player.alive);
    }

    #[test]
    fn cleared_once_all_enemies_are_pruned() {
        let mut level = Level::new(1);
        for enemy in &mut level.enemies {
            enemy.alive = false;
        }
        let cleared = level.update(1.0 / 60.0, &Controls::default());
        assert!(cleared);
        assert!(level.enemies.is_empty());
        assert!(!level.player_destroyed);
    }
}
