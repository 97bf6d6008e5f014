use tank_battle::config::{BACKGROUND_COLOR, SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use tank_battle::input;
use tank_battle::session::Session;

use raylib::prelude::RaylibDraw;

fn main() {
    env_logger::init();

    let (mut rl, thread) = raylib::init()
        .size(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32)
        .title("Tank Battle Infinite")
        .build();
    rl.set_target_fps(TARGET_FPS);

    let mut session = Session::new();
    while session.running && !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let controls = input::sample(&rl);
        session.update(dt, &controls);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND_COLOR);
        session.draw(&mut d);
    }
}
