//! Points, lines, circles and triangles in the plane.

use std::fmt;

use nalgebra::{Point2, Rotation2, Vector2};
use numlab_core::error::{NumError, Result};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Abscissa
    pub x: f64,
    /// Ordinate
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// `|self - other|²`.
    pub fn distance_squared(&self, other: &Self) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    /// `|self - other|`.
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// The point shifted by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The point rotated counter-clockwise by `angle_deg` degrees about `center`.
    pub fn rotate_about(&self, angle_deg: f64, center: &Self) -> Self {
        let rotation = Rotation2::new(angle_deg.to_radians());
        let offset = Vector2::new(self.x - center.x, self.y - center.y);
        let rotated = rotation * offset;
        Self::new(rotated.x + center.x, rotated.y + center.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A line in general form `Ax + By + C = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Coefficient of `x`
    pub a: f64,
    /// Coefficient of `y`
    pub b: f64,
    /// Constant term
    pub c: f64,
}

impl Line {
    /// The line through two distinct points.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the points coincide.
    pub fn through(p1: &Point, p2: &Point) -> Result<Self> {
        if p1 == p2 {
            return Err(NumError::invalid_input(format!(
                "a line needs two distinct points, got {p1} twice"
            )));
        }
        Ok(Self {
            a: p1.y - p2.y,
            b: p2.x - p1.x,
            c: p1.x * p2.y - p2.x * p1.y,
        })
    }

    /// `Ax + By + C` at `p` (zero on the line).
    pub fn evaluate(&self, p: &Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Unit direction vector `(B, -A) / |(A, B)|`.
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.b, -self.a).normalize()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}x + {:.2}y + {:.2} = 0", self.a, self.b, self.c)
    }
}

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center
    pub center: Point,
    /// Radius, non-negative
    pub radius: f64,
}

impl Circle {
    /// Create a circle, rejecting a negative or non-finite radius.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(NumError::invalid_input(format!(
                "radius must be finite and non-negative, got {radius}"
            )));
        }
        Ok(Self { center, radius })
    }
}

/// A triangle, transformed in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices in order
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Create a triangle from its vertices.
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Shift every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            *v = v.translate(dx, dy);
        }
    }

    /// Rotate every vertex by `angle_deg` degrees about `center`.
    pub fn rotate(&mut self, angle_deg: f64, center: &Point) {
        for v in &mut self.vertices {
            *v = v.rotate_about(angle_deg, center);
        }
    }

    /// Unsigned area from the shoelace formula.
    pub fn area(&self) -> f64 {
        let [p, q, r] = self.vertices;
        ((q.x - p.x) * (r.y - p.y) - (r.x - p.x) * (q.y - p.y)).abs() / 2.0
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices;
        write!(f, "Triangle[{a}, {b}, {c}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(1.0, -2.345).to_string(), "(1.00, -2.35)");
    }

    #[test]
    fn test_line_coefficients() {
        let line = Line::through(&Point::new(0.0, 0.0), &Point::new(10.0, 10.0)).unwrap();
        assert_eq!(line, Line { a: -10.0, b: 10.0, c: 0.0 });
        assert_eq!(line.evaluate(&Point::new(3.0, 3.0)), 0.0);
    }

    #[test]
    fn test_degenerate_shapes_rejected() {
        let p = Point::new(1.0, 1.0);
        assert!(Line::through(&p, &p).is_err());
        assert!(Circle::new(p, -1.0).is_err());
        assert!(Circle::new(p, f64::NAN).is_err());
        assert!(Circle::new(p, 0.0).is_ok());
    }

    #[test]
    fn test_triangle_transform() {
        let mut tri = Triangle::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 2.0));
        tri.translate(5.0, 5.0);
        assert_eq!(tri.vertices[2], Point::new(6.0, 7.0));

        tri.rotate(90.0, &Point::new(5.0, 5.0));
        let expected = [(5.0, 5.0), (5.0, 7.0), (3.0, 6.0)];
        for (v, (x, y)) in tri.vertices.iter().zip(expected) {
            assert_relative_eq!(v.x, x, epsilon = 1e-12);
            assert_relative_eq!(v.y, y, epsilon = 1e-12);
        }
        assert_relative_eq!(tri.area(), 2.0, epsilon = 1e-12);
        assert_eq!(tri.to_string(), "Triangle[(5.00, 5.00), (5.00, 7.00), (3.00, 6.00)]");
    }
}
