use core::fmt::{Debug, Display};
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

/// Coefficient domain of a polynomial.
///
/// This trait assumes the usual floating-point field operations:
/// - `ZERO` is the additive identity, `ONE` the multiplicative identity
/// - exact zero is the only value a term may not carry
/// - `FromStr` parses the textual coefficient of a term list line.
pub trait Scalar:
    Sized
    + Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// `false` for NaN and the infinities.
    fn is_finite(self) -> bool;

    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    #[inline]
    fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Exponentiation by a non-negative integer using square-and-multiply.
    fn pow(self, exp: u32) -> Self {
        let mut base = self;
        let mut result = Self::ONE;

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            e >>= 1;
            if e > 0 {
                base = base * base;
            }
        }
        result
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
