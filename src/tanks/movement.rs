use raylib::prelude::Rectangle;

use crate::entities::Tank;
use crate::math::rects_overlap;

/// Pushes the tank out of any wall it overlaps, along the axis of shallowest
/// penetration. One pass over the wall list; the bounding rectangle is
/// recomputed after every correction so later walls see the adjusted
/// position. Resolving against one wall can push into an adjacent one, a
/// known artifact of the heuristic.
pub(super) fn resolve_wall_collisions(tank: &mut Tank, walls: &[Rectangle]) {
    let Some(mut rect) = tank.bounding_rect() else {
        return;
    };
    for wall in walls {
        if !rects_overlap(&rect, wall) {
            continue;
        }
        let push_right = wall.x + wall.width - rect.x;
        let push_left = rect.x + rect.width - wall.x;
        let push_down = wall.y + wall.height - rect.y;
        let push_up = rect.y + rect.height - wall.y;
        let min_penetration = push_right.min(push_left).min(push_down).min(push_up);

        if min_penetration == push_right {
            tank.position.x += push_right;
        } else if min_penetration == push_left {
            tank.position.x -= push_left;
        } else if min_penetration == push_down {
            tank.position.y += push_down;
        } else {
            tank.position.y -= push_up;
        }

        match tank.bounding_rect() {
            Some(updated) => rect = updated,
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2;

    #[test]
    fn resolves_along_shallowest_axis() {
        // Penetration depths against the wall: left 5, right 40, top 3,
        // bottom 50. The smallest is top, so the tank is pushed down by 3.
        let wall = Rectangle::new(0.0, 0.0, 25.0, 30.0);
        let mut tank = Tank::player(vec2(30.0, 38.5));
        tank.size = vec2(20.0, 23.0);

        let rect = tank.bounding_rect().unwrap();
        assert_eq!(wall.x + wall.width - rect.x, 5.0);
        assert_eq!(rect.x + rect.width - wall.x, 40.0);
        assert_eq!(wall.y + wall.height - rect.y, 3.0);
        assert_eq!(rect.y + rect.height - wall.y, 50.0);

        resolve_wall_collisions(&mut tank, &[wall]);
        assert_eq!(tank.position.x, 30.0);
        assert_eq!(tank.position.y, 41.5);
        assert!(!rects_overlap(&tank.bounding_rect().unwrap(), &wall));
    }

    #[test]
    fn non_overlapping_tank_is_untouched() {
        let wall = Rectangle::new(0.0, 0.0, 48.0, 48.0);
        let mut tank = Tank::player(vec2(200.0, 200.0));
        resolve_wall_collisions(&mut tank, &[wall]);
        assert_eq!(tank.position.x, 200.0);
        assert_eq!(tank.position.y, 200.0);
    }

    #[test]
    fn dead_tank_is_skipped() {
        let wall = Rectangle::new(0.0, 0.0, 48.0, 48.0);
        let mut tank = Tank::player(vec2(24.0, 24.0));
        tank.alive = false;
        resolve_wall_collisions(&mut tank, &[wall]);
        assert_eq!(tank.position.x, 24.0);
    }
}
