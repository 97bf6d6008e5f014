use raylib::prelude::RaylibDraw;

use crate::config::{SHELL_COLOR, TEXT_COLOR, WALL_COLOR};
use crate::entities::Tank;
use crate::level::Level;
use crate::math::{heading_vec, vec2_add, vec2_scale};
use crate::session::Session;

const BARREL_EXTENT: f32 = 10.0;
const BARREL_THICKNESS: f32 = 4.0;

impl Session {
    pub fn draw<D: RaylibDraw>(&self, d: &mut D) {
        self.level.draw(d);
        let label = format!("Level {}", self.level_number);
        d.draw_text(&label, 10, 10, 24, TEXT_COLOR);
    }
}

impl Level {
    pub fn draw<D: RaylibDraw>(&self, d: &mut D) {
        for wall in &self.walls {
            d.draw_rectangle_rec(*wall, WALL_COLOR);
        }
        for enemy in &self.enemies {
            draw_tank(d, enemy);
        }
        draw_tank(d, &self.player);
    }
}

fn draw_tank<D: RaylibDraw>(d: &mut D, tank: &Tank) {
    let Some(rect) = tank.bounding_rect() else {
        return;
    };
    d.draw_rectangle_rec(rect, tank.color);

    let barrel_end = vec2_add(
        tank.position,
        vec2_scale(heading_vec(tank.heading), tank.size.x * 0.5 + BARREL_EXTENT),
    );
    d.draw_line_ex(tank.position, barrel_end, BARREL_THICKNESS, SHELL_COLOR);

    for shell in &tank.shells {
        if shell.alive {
            d.draw_circle_v(shell.position, shell.radius, SHELL_COLOR);
        }
    }
}
