use core::fmt;

use thiserror::Error;

use crate::algebra::scalar::Scalar;

/// A single term `coeff * x^degree`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term<T> {
    pub coeff: T,
    pub degree: u32,
}

impl<T> Term<T> {
    pub const fn new(coeff: T, degree: u32) -> Self {
        Self { coeff, degree }
    }
}

impl<T: Scalar> Term<T> {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Value of this term at `x`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.coeff * x.pow(self.degree)
    }
}

impl<T> From<(T, u32)> for Term<T> {
    fn from((coeff, degree): (T, u32)) -> Self {
        Self { coeff, degree }
    }
}

/// Writes `3`, `2x` or `4x^5`; a unit coefficient is elided on
/// non-constant terms.
impl<T: Scalar> fmt::Display for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.degree > 0 && (self.coeff == T::ONE || self.coeff == -T::ONE);
        if unit {
            if self.coeff.is_negative() {
                write!(f, "-")?;
            }
        } else {
            write!(f, "{}", self.coeff)?;
        }

        match self.degree {
            0 => Ok(()),
            1 => write!(f, "x"),
            d => write!(f, "x^{}", d),
        }
    }
}

/// A term sequence that does not meet the canonical form of a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TermError {
    /// Degrees must strictly descend; equal degrees are duplicates.
    #[error("degree {found} does not descend from previous degree {previous}")]
    NotDescending { previous: u32, found: u32 },
    #[error("term of degree {degree} has a zero coefficient")]
    ZeroCoefficient { degree: u32 },
    #[error("term of degree {degree} has a non-finite coefficient")]
    NonFiniteCoefficient { degree: u32 },
}
