use raylib::prelude::{Rectangle, Vector2};

pub fn vec2(x: f32, y: f32) -> Vector2 {
    Vector2 { x, y }
}

pub fn vec2_add(a: Vector2, b: Vector2) -> Vector2 {
    vec2(a.x + b.x, a.y + b.y)
}

pub fn vec2_sub(a: Vector2, b: Vector2) -> Vector2 {
    vec2(a.x - b.x, a.y - b.y)
}

pub fn vec2_scale(v: Vector2, s: f32) -> Vector2 {
    vec2(v.x * s, v.y * s)
}

pub fn vec2_length_sqr(v: Vector2) -> f32 {
    v.x * v.x + v.y * v.y
}

pub fn vec2_length(v: Vector2) -> f32 {
    vec2_length_sqr(v).sqrt()
}

pub fn vec2_normalize(v: Vector2) -> Vector2 {
    let len = vec2_length(v);
    if len > 0.0 {
        vec2_scale(v, 1.0 / len)
    } else {
        vec2(0.0, 0.0)
    }
}

/// Unit vector for a heading given in degrees.
pub fn heading_vec(angle_degrees: f32) -> Vector2 {
    let radians = angle_degrees.to_radians();
    vec2(radians.cos(), radians.sin())
}

pub fn vec2_heading(v: Vector2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

/// Wraps an angle difference into [-180, 180) degrees.
pub fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

pub fn rect_contains_point(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

pub fn rects_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_vec_points_up_for_negative_ninety() {
        let dir = heading_vec(-90.0);
        assert!(dir.x.abs() < 1e-5);
        assert!((dir.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn wrap_degrees_stays_in_half_open_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(540.0), -180.0);
        for angle in [-720.0, -361.0, -180.0, 179.0, 359.0, 1234.5] {
            let wrapped = wrap_degrees(angle);
            assert!((-180.0..180.0).contains(&wrapped), "{angle} -> {wrapped}");
        }
    }

    #[test]
    fn overlap_excludes_touching_edges() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &Rectangle::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!rects_overlap(&a, &Rectangle::new(10.0, 0.0, 10.0, 10.0)));
    }
}
