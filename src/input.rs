use raylib::prelude::{KeyboardKey, RaylibHandle};

/// Control intents for one frame. Movement and rotation are level-triggered,
/// fire and quit are edge-triggered.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controls {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool,
    pub quit: bool,
}

pub fn sample(rl: &RaylibHandle) -> Controls {
    Controls {
        forward: rl.is_key_down(KeyboardKey::KEY_W) || rl.is_key_down(KeyboardKey::KEY_UP),
        backward: rl.is_key_down(KeyboardKey::KEY_S) || rl.is_key_down(KeyboardKey::KEY_DOWN),
        turn_left: rl.is_key_down(KeyboardKey::KEY_A) || rl.is_key_down(KeyboardKey::KEY_LEFT),
        turn_right: rl.is_key_down(KeyboardKey::KEY_D) || rl.is_key_down(KeyboardKey::KEY_RIGHT),
        fire: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
        quit: rl.is_key_pressed(KeyboardKey::KEY_ESCAPE),
    }
}
