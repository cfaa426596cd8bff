use crate::algebra::scalar::Scalar;
use crate::structures::term::{Term, TermError};

/// Check that `degree` may follow `previous` in a degree-ordered sequence.
///
/// Degrees strictly descend, so an equal degree is reported as a
/// duplicate through the same error.
#[inline]
pub fn check_order(previous: Option<u32>, degree: u32) -> Result<(), TermError> {
    match previous {
        Some(previous) if degree >= previous => Err(TermError::NotDescending {
            previous,
            found: degree,
        }),
        _ => Ok(()),
    }
}

/// Check a whole term sequence against the canonical form of a polynomial:
/// strictly descending degrees, finite non-zero coefficients.
pub fn check_canonical<T: Scalar>(terms: &[Term<T>]) -> Result<(), TermError> {
    let mut previous = None;
    for term in terms {
        check_order(previous, term.degree)?;
        if !term.coeff.is_finite() {
            return Err(TermError::NonFiniteCoefficient {
                degree: term.degree,
            });
        }
        if term.is_zero() {
            return Err(TermError::ZeroCoefficient {
                degree: term.degree,
            });
        }
        previous = Some(term.degree);
    }
    Ok(())
}

/// Whether degrees strictly descend and no coefficient is zero.
///
/// Unlike [`check_canonical`] this accepts non-finite coefficients, which
/// arithmetic may legitimately produce on overflow.
pub fn is_canonical<T: Scalar>(terms: &[Term<T>]) -> bool {
    terms.iter().all(|t| !t.is_zero()) && terms.windows(2).all(|w| w[0].degree > w[1].degree)
}
