use log::info;

use crate::input::Controls;
use crate::level::Level;
use crate::tanks;

/// Campaign controller. Owns the current level and replaces it wholesale on
/// transition; nothing carries over between levels.
pub struct Session {
    pub level_number: u32,
    pub level: Level,
    pub running: bool,
}

impl Session {
    pub fn new() -> Self {
        Session {
            level_number: 1,
            level: Level::new(1),
            running: true,
        }
    }

    /// One frame: apply the fire intent, advance the level, then evaluate the
    /// transition. Clearing advances the counter; losing the player restarts
    /// the campaign at level 1 immediately, with no lives or game-over state.
    pub fn update(&mut self, dt: f32, controls: &Controls) {
        if controls.quit {
            self.running = false;
        }
        if controls.fire {
            tanks::fire(&mut self.level.player);
        }

        let cleared = self.level.update(dt, controls);
        if cleared {
            self.level_number += 1;
            info!("level cleared, advancing to level {}", self.level_number);
            self.level = Level::new(self.level_number);
        } else if self.level.player_destroyed {
            info!(
                "player destroyed on level {}, restarting campaign",
                self.level_number
            );
            self.level_number = 1;
            self.level = Level::new(1);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_a_level_advances_the_counter() {
        let mut session = Session::new();
        for enemy in &mut session.level.enemies {
            enemy.alive = false;
        }
        session.update(1.0 / 60.0, &Controls::default());
        assert_eq!(session.level_number, 2);
        assert_eq!(session.level.number, 2);
    }

    #[test]
    fn quit_intent_stops_the_session() {
        let mut session = Session::new();
        let controls = Controls {
            quit: true,
            ..Controls::default()
        };
        session.update(1.0 / 60.0, &controls);
        assert!(!session.running);
    }
}
