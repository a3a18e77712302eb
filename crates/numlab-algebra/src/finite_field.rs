//! Arithmetic in the prime field 𝔽ₚ.
//!
//! The modulus is a const parameter, so elements of different fields are
//! different types and cannot be mixed by accident. Values are kept reduced
//! in `[0, P)`; every product is computed in `u128` so any `u64` modulus is
//! safe from overflow.
//!
//! Inversion uses Fermat's little theorem (`a⁻¹ = a^(P-2)`), which is only
//! correct when `P` is prime. [`crate::group`] checks primality before
//! building groups on top of `Fp`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};
use numlab_core::error::{NumError, Result};

/// An element of the field of integers modulo `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fp<const P: u64> {
    value: u64,
}

impl<const P: u64> Fp<P> {
    /// Modulus of the field.
    pub const MODULUS: u64 = P;

    /// Reduce an integer (of either sign) into the field.
    pub fn new(value: i64) -> Self {
        const { assert!(P >= 2, "field modulus must be at least 2") };
        let reduced = i128::from(value).rem_euclid(i128::from(P));
        Self {
            value: reduced as u64,
        }
    }

    /// Reduce a non-negative integer into the field. Covers every residue,
    /// including those above `i64::MAX` when `P` is that large.
    pub fn from_u64(value: u64) -> Self {
        const { assert!(P >= 2, "field modulus must be at least 2") };
        Self::from_reduced(value % P)
    }

    /// Representative in `[0, P)`.
    pub const fn value(self) -> u64 {
        self.value
    }

    const fn from_reduced(value: u64) -> Self {
        Self { value }
    }

    /// `self^exponent` by square-and-multiply.
    pub fn pow(self, mut exponent: u64) -> Self {
        let modulus = u128::from(P);
        let mut base = u128::from(self.value);
        let mut acc: u128 = 1 % modulus;
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = acc * base % modulus;
            }
            base = base * base % modulus;
            exponent >>= 1;
        }
        Self::from_reduced(acc as u64)
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for the zero element.
    pub fn inverse(self) -> Result<Self> {
        if self.value == 0 {
            return Err(NumError::division_by_zero(format!(
                "inverting 0 in F_{P}"
            )));
        }
        Ok(self.pow(P - 2))
    }

    /// `self / rhs`, or `DivisionByZero` when `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs.inverse()?)
    }
}

impl<const P: u64> From<i64> for Fp<P> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> fmt::Display for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<const P: u64> Add for Fp<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let sum = (u128::from(self.value) + u128::from(rhs.value)) % u128::from(P);
        Self::from_reduced(sum as u64)
    }
}

impl<const P: u64> Sub for Fp<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for Fp<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let product = u128::from(self.value) * u128::from(rhs.value) % u128::from(P);
        Self::from_reduced(product as u64)
    }
}

impl<const P: u64> Neg for Fp<P> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.value == 0 {
            self
        } else {
            Self::from_reduced(P - self.value)
        }
    }
}

impl<const P: u64> AddAssign for Fp<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u64> SubAssign for Fp<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u64> MulAssign for Fp<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u64> Zero for Fp<P> {
    fn zero() -> Self {
        Self::from_reduced(0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<const P: u64> One for Fp<P> {
    fn one() -> Self {
        Self::from_reduced(1)
    }
}
