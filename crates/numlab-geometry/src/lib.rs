//! Analytic plane geometry.
//!
//! Lines are kept in general form `Ax + By + C = 0`, which has no special
//! case for vertical lines. Intersections follow from Cramer's rule and the
//! perpendicular foot from projecting onto the normal `(A, B)`.
//!
//! # Modules
//!
//! - [`shapes`]: Point, line, circle and triangle types
//! - [`construct`]: Intersections, perpendicular feet, Pythagoras check

pub mod construct;
pub mod shapes;

pub use construct::{
    foot_of_perpendicular, intersect_line_circle, intersect_lines, verify_pythagoras,
    PythagorasReport,
};
pub use shapes::{Circle, Line, Point, Triangle};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::construct::{
        foot_of_perpendicular, intersect_line_circle, intersect_lines, verify_pythagoras,
    };
    pub use crate::shapes::{Circle, Line, Point, Triangle};
}
