//! The scalar trait generic numerics are written against.

use approx::RelativeEq;
use nalgebra::Scalar as NalgebraScalar;
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// A real floating-point type (`f32` or `f64`).
///
/// Elementary functions come from [`Float`] alone, so `x.sqrt()` or
/// `x.ln()` resolve in generic code without qualification. Literals enter
/// through [`Scalar::from_f64`]; values leave for logging through
/// [`Scalar::as_f64`].
pub trait Scalar:
    NalgebraScalar
    + Float
    + FromPrimitive
    + RelativeEq<Epsilon = Self>
    + Display
    + Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Distance from 1 to the next representable value.
    const EPSILON: Self;

    /// Lift an `f64` literal. Exact for `f64`, correctly rounded for `f32`.
    ///
    /// # Panics
    ///
    /// Never for the two implementors; `FromPrimitive` only fails for
    /// types that cannot represent floating-point values at all.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("float type accepts every f64")
    }

    /// Lift a count or index.
    ///
    /// # Panics
    ///
    /// See [`Scalar::from_f64`].
    fn from_usize(v: usize) -> Self {
        <Self as FromPrimitive>::from_usize(v).expect("float type accepts every usize")
    }

    /// Widen to `f64` for tracing fields and formatted reports.
    ///
    /// # Panics
    ///
    /// See [`Scalar::from_f64`].
    fn as_f64(self) -> f64 {
        num_traits::cast(self).expect("float type widens to f64")
    }
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
}

/// Mathematical constants at the precision of `T`.
pub mod constants {
    use super::Scalar;

    /// π
    pub fn pi<T: Scalar>() -> T {
        <T as Scalar>::from_f64(std::f64::consts::PI)
    }

    /// τ = 2π, one full turn.
    pub fn tau<T: Scalar>() -> T {
        <T as Scalar>::from_f64(std::f64::consts::TAU)
    }
}
