//! Intersections, perpendicular feet and the Pythagorean check.

use numlab_core::numerical::is_close;
use tracing::{debug, instrument};

use crate::shapes::{Circle, Line, Point};

/// Intersection of two lines, or `None` when `|det| < eps` (parallel or
/// coincident).
pub fn intersect_lines(l1: &Line, l2: &Line, eps: f64) -> Option<Point> {
    let det = l1.a * l2.b - l2.a * l1.b;
    if det.abs() < eps {
        return None;
    }
    Some(Point::new(
        (l1.b * l2.c - l2.b * l1.c) / det,
        (l2.a * l1.c - l1.a * l2.c) / det,
    ))
}

/// Orthogonal projection of `p` onto `line`.
pub fn foot_of_perpendicular(p: &Point, line: &Line) -> Point {
    let t = -line.evaluate(p) / (line.a * line.a + line.b * line.b);
    Point::new(p.x + line.a * t, p.y + line.b * t)
}

/// Points where `line` meets `circle`.
///
/// Empty when the line misses the circle and a single point (the foot of
/// the perpendicular from the center) when it is tangent, judged with a
/// relative tolerance of 1e-9 on the squared distances. Otherwise two
/// points, the one in the direction `(B, -A)` from the foot first.
pub fn intersect_line_circle(line: &Line, circle: &Circle) -> Vec<Point> {
    let foot = foot_of_perpendicular(&circle.center, line);
    let d2 = foot.distance_squared(&circle.center);
    let r2 = circle.radius * circle.radius;

    if is_close(d2, r2, 1e-9, 0.0) {
        return vec![foot];
    }
    if d2 > r2 {
        return Vec::new();
    }

    let half_chord = (r2 - d2).sqrt();
    let dir = line.direction() * half_chord;
    vec![
        foot.translate(dir.x, dir.y),
        foot.translate(-dir.x, -dir.y),
    ]
}

/// Squared side lengths of the right triangle `A P B`, with `P` the foot of
/// the perpendicular from `A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PythagorasReport {
    /// Foot of the perpendicular from `A` on the line
    pub foot: Point,
    /// `|AP|²`
    pub ap_squared: f64,
    /// `|PB|²`
    pub pb_squared: f64,
    /// `|AB|²`
    pub ab_squared: f64,
    /// Whether `|AP|² + |PB|² ≈ |AB|²`
    pub passed: bool,
}

/// Check `|AP|² + |PB|² = |AB|²` for a point `a` off `line` and `b` on it.
#[instrument(skip_all, fields(a = %a, b = %b))]
pub fn verify_pythagoras(a: &Point, line: &Line, b: &Point, rel_tol: f64) -> PythagorasReport {
    let foot = foot_of_perpendicular(a, line);
    let ap_squared = a.distance_squared(&foot);
    let pb_squared = foot.distance_squared(b);
    let ab_squared = a.distance_squared(b);
    let passed = is_close(ap_squared + pb_squared, ab_squared, rel_tol, 1e-12);

    debug!(ap_squared, pb_squared, ab_squared, passed, "pythagoras checked");
    PythagorasReport {
        foot,
        ap_squared,
        pb_squared,
        ab_squared,
        passed,
    }
}
