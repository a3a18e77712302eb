//! Finite groups and exhaustive axiom checking.
//!
//! A [`FiniteGroup`] exposes its whole element set, which lets
//! [`check_group_axioms`] test closure, associativity, identity and
//! inverses over every element (and every triple) instead of sampling.

use std::fmt;

use num_traits::{One, Zero};
use numlab_core::error::NumError;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::finite_field::Fp;
use crate::primes::is_prime;

/// A finite group given by its elements and operation.
pub trait FiniteGroup {
    /// Element type.
    type Element: Copy + PartialEq + fmt::Display;

    /// Every element of the group.
    fn elements(&self) -> Vec<Self::Element>;

    /// Group operation `a ∘ b`.
    fn op(&self, a: Self::Element, b: Self::Element) -> Self::Element;

    /// Identity element.
    fn identity(&self) -> Self::Element;

    /// Inverse of `a`.
    fn inverse(&self, a: Self::Element) -> Self::Element;

    /// Human-readable name, used in reports and logs.
    fn name(&self) -> String;
}

/// The requested modulus is not prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("modulus {modulus} is not prime")]
pub struct NotPrime {
    /// Offending modulus
    pub modulus: u64,
}

impl From<NotPrime> for NumError {
    fn from(err: NotPrime) -> Self {
        Self::domain_error(err.to_string())
    }
}

fn ensure_prime(modulus: u64) -> Result<(), NotPrime> {
    if is_prime(modulus) {
        Ok(())
    } else {
        Err(NotPrime { modulus })
    }
}

/// `(𝔽ₚ, +)`: all residues, identity 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdditiveGroup<const P: u64> {
    _private: (),
}

impl<const P: u64> AdditiveGroup<P> {
    /// Build the group, rejecting a composite modulus.
    pub fn new() -> Result<Self, NotPrime> {
        ensure_prime(P)?;
        Ok(Self { _private: () })
    }
}

impl<const P: u64> FiniteGroup for AdditiveGroup<P> {
    type Element = Fp<P>;

    fn elements(&self) -> Vec<Fp<P>> {
        (0..P).map(Fp::from_u64).collect()
    }

    fn op(&self, a: Fp<P>, b: Fp<P>) -> Fp<P> {
        a + b
    }

    fn identity(&self) -> Fp<P> {
        Fp::zero()
    }

    fn inverse(&self, a: Fp<P>) -> Fp<P> {
        -a
    }

    fn name(&self) -> String {
        format!("(F_{P}, +)")
    }
}

/// `(𝔽ₚ*, ×)`: residues `1..P`, identity 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplicativeGroup<const P: u64> {
    _private: (),
}

impl<const P: u64> MultiplicativeGroup<P> {
    /// Build the group, rejecting a composite modulus.
    pub fn new() -> Result<Self, NotPrime> {
        ensure_prime(P)?;
        Ok(Self { _private: () })
    }
}

impl<const P: u64> FiniteGroup for MultiplicativeGroup<P> {
    type Element = Fp<P>;

    fn elements(&self) -> Vec<Fp<P>> {
        (1..P).map(Fp::from_u64).collect()
    }

    fn op(&self, a: Fp<P>, b: Fp<P>) -> Fp<P> {
        a * b
    }

    fn identity(&self) -> Fp<P> {
        Fp::one()
    }

    fn inverse(&self, a: Fp<P>) -> Fp<P> {
        a.pow(P - 2)
    }

    fn name(&self) -> String {
        format!("(F_{P}*, ×)")
    }
}

/// First axiom found not to hold, with the elements involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxiomViolation {
    /// `a ∘ b` is not an element of the group.
    #[error("closure fails: {a} ∘ {b} = {product} is not in the group")]
    Closure {
        /// Left operand
        a: String,
        /// Right operand
        b: String,
        /// Product outside the element set
        product: String,
    },

    /// `(a ∘ b) ∘ c ≠ a ∘ (b ∘ c)`.
    #[error("associativity fails for ({a}, {b}, {c})")]
    Associativity {
        /// First element
        a: String,
        /// Second element
        b: String,
        /// Third element
        c: String,
    },

    /// `a ∘ e ≠ a` or `e ∘ a ≠ a`.
    #[error("identity {identity} fails for {element}")]
    Identity {
        /// Claimed identity
        identity: String,
        /// Element it does not fix
        element: String,
    },

    /// `a ∘ a⁻¹ ≠ e`.
    #[error("{element} ∘ {inverse} is not the identity")]
    Inverse {
        /// Element
        element: String,
        /// Claimed inverse
        inverse: String,
    },

    /// `a(b + c) ≠ ab + ac`.
    #[error("distributivity fails: {a}·({b}+{c}) = {left} but {a}·{b}+{a}·{c} = {right}")]
    Distributivity {
        /// Multiplier
        a: String,
        /// First summand
        b: String,
        /// Second summand
        c: String,
        /// `a(b + c)`
        left: String,
        /// `ab + ac`
        right: String,
    },
}

/// Summary of a successful axiom check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxiomReport {
    /// Group name
    pub group: String,
    /// Number of elements
    pub order: usize,
    /// Triples tested for associativity
    pub triples_checked: usize,
}

impl fmt::Display for AxiomReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: order {}, closure/associativity/identity/inverse hold ({} triples)",
            self.group, self.order, self.triples_checked
        )
    }
}

/// Check the four group axioms over every element of `group`.
#[instrument(skip(group), fields(group = %group.name()))]
pub fn check_group_axioms<G: FiniteGroup>(group: &G) -> Result<AxiomReport, AxiomViolation> {
    let elements = group.elements();
    let identity = group.identity();

    for &a in &elements {
        for &b in &elements {
            let product = group.op(a, b);
            if !elements.contains(&product) {
                return Err(AxiomViolation::Closure {
                    a: a.to_string(),
                    b: b.to_string(),
                    product: product.to_string(),
                });
            }
        }
    }
    debug!(order = elements.len(), "closure holds");

    let mut triples_checked = 0;
    for &a in &elements {
        for &b in &elements {
            let ab = group.op(a, b);
            for &c in &elements {
                if group.op(ab, c) != group.op(a, group.op(b, c)) {
                    return Err(AxiomViolation::Associativity {
                        a: a.to_string(),
                        b: b.to_string(),
                        c: c.to_string(),
                    });
                }
                triples_checked += 1;
            }
        }
    }
    debug!(triples_checked, "associativity holds");

    for &a in &elements {
        if group.op(a, identity) != a || group.op(identity, a) != a {
            return Err(AxiomViolation::Identity {
                identity: identity.to_string(),
                element: a.to_string(),
            });
        }
    }

    for &a in &elements {
        let inverse = group.inverse(a);
        if group.op(a, inverse) != identity {
            return Err(AxiomViolation::Inverse {
                element: a.to_string(),
                inverse: inverse.to_string(),
            });
        }
    }
    debug!("identity and inverses hold");

    Ok(AxiomReport {
        group: group.name(),
        order: elements.len(),
        triples_checked,
    })
}

/// Check `a(b + c) = ab + ac` for one triple.
pub fn check_distributivity<const P: u64>(
    a: Fp<P>,
    b: Fp<P>,
    c: Fp<P>,
) -> Result<(), AxiomViolation> {
    let left = a * (b + c);
    let right = a * b + a * c;
    if left == right {
        Ok(())
    } else {
        Err(AxiomViolation::Distributivity {
            a: a.to_string(),
            b: b.to_string(),
            c: c.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        })
    }
}

/// Check distributivity over every triple of 𝔽ₚ. Returns the triple count.
pub fn check_field_distributivity<const P: u64>() -> Result<usize, AxiomViolation> {
    let elements: Vec<Fp<P>> = (0..P).map(Fp::from_u64).collect();
    let mut checked = 0;
    for &a in &elements {
        for &b in &elements {
            for &c in &elements {
                check_distributivity(a, b, c)?;
                checked += 1;
            }
        }
    }
    debug!(modulus = P, checked, "distributivity holds");
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_additive_group_mod_13() {
        let group = AdditiveGroup::<13>::new().unwrap();
        let report = check_group_axioms(&group).unwrap();
        assert_eq!(report.order, 13);
        assert_eq!(report.triples_checked, 13 * 13 * 13);
        assert_eq!(report.group, "(F_13, +)");
    }

    #[test]
    fn test_multiplicative_group_mod_13() {
        let group = MultiplicativeGroup::<13>::new().unwrap();
        let report = check_group_axioms(&group).unwrap();
        assert_eq!(report.order, 12);
        assert_eq!(group.identity(), Fp::new(1));
        assert_eq!(group.inverse(Fp::new(5)), Fp::new(8));
    }

    #[test]
    fn test_elements_are_every_residue_once() {
        let additive = AdditiveGroup::<7>::new().unwrap().elements();
        let values: Vec<u64> = additive.iter().map(|e| e.value()).collect();
        assert_eq!(values, (0..7).collect::<Vec<u64>>());

        let multiplicative = MultiplicativeGroup::<7>::new().unwrap().elements();
        let values: Vec<u64> = multiplicative.iter().map(|e| e.value()).collect();
        assert_eq!(values, (1..7).collect::<Vec<u64>>());
    }

    #[test]
    fn test_composite_modulus_rejected() {
        assert_eq!(
            MultiplicativeGroup::<12>::new(),
            Err(NotPrime { modulus: 12 })
        );
        assert!(AdditiveGroup::<9>::new().is_err());
        let err: NumError = NotPrime { modulus: 12 }.into();
        assert!(matches!(err, NumError::DomainError { .. }));
    }

    /// Nonzero residues mod 12 under multiplication: not closed (3·4 = 0).
    struct BrokenUnits;

    impl FiniteGroup for BrokenUnits {
        type Element = Fp<12>;

        fn elements(&self) -> Vec<Fp<12>> {
            (1..12).map(Fp::new).collect()
        }

        fn op(&self, a: Fp<12>, b: Fp<12>) -> Fp<12> {
            a * b
        }

        fn identity(&self) -> Fp<12> {
            Fp::one()
        }

        fn inverse(&self, a: Fp<12>) -> Fp<12> {
            a
        }

        fn name(&self) -> String {
            "Z_12 \\ {0}".to_string()
        }
    }

    #[test]
    fn test_closure_violation_reported() {
        let err = check_group_axioms(&BrokenUnits).unwrap_err();
        assert_eq!(
            err,
            AxiomViolation::Closure {
                a: "2".into(),
                b: "6".into(),
                product: "0".into(),
            }
        );
    }

    /// Subtraction mod 5: closed, but neither associative nor two-sided.
    struct Subtraction;

    impl FiniteGroup for Subtraction {
        type Element = Fp<5>;

        fn elements(&self) -> Vec<Fp<5>> {
            (0..5).map(Fp::new).collect()
        }

        fn op(&self, a: Fp<5>, b: Fp<5>) -> Fp<5> {
            a - b
        }

        fn identity(&self) -> Fp<5> {
            Fp::zero()
        }

        fn inverse(&self, a: Fp<5>) -> Fp<5> {
            a
        }

        fn name(&self) -> String {
            "(Z_5, -)".to_string()
        }
    }

    #[test]
    fn test_associativity_violation_reported() {
        let err = check_group_axioms(&Subtraction).unwrap_err();
        // (0 - 0) - 1 = 4 but 0 - (0 - 1) = 1
        assert_eq!(
            err,
            AxiomViolation::Associativity {
                a: "0".into(),
                b: "0".into(),
                c: "1".into(),
            }
        );
    }

    #[test]
    fn test_distributivity() {
        assert!(check_distributivity(Fp::<13>::new(3), Fp::new(7), Fp::new(10)).is_ok());
        assert_eq!(check_field_distributivity::<7>().unwrap(), 343);
    }
}
