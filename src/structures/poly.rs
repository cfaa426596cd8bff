use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::scalar::Scalar;
use crate::structures::term::{Term, TermError};
use crate::utils;

/// Sparse polynomial in one variable.
///
/// Terms are stored in strictly descending order of degree, highest degree
/// first. No two terms share a degree and no term has a zero coefficient,
/// so the zero polynomial is the empty term list.
///
/// All arithmetic takes its operands by reference (or consumes them through
/// the operator traits) and builds a fresh term list; no allocation is ever
/// proportional to the degree, only to the number of terms.
#[derive(Clone, PartialEq)]
pub struct Poly<T = f32> {
    terms: Vec<Term<T>>,
}

impl<T: Scalar> Poly<T> {
    /// Create the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use termpoly::Poly;
    ///
    /// let zero = Poly::<f32>::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.degree(), None);
    /// ```
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Build a polynomial from `(coefficient, degree)` pairs.
    ///
    /// The pairs must arrive in strictly descending order of degree; they
    /// are stored in the order given and never re-sorted. Pairs with an
    /// exactly-zero coefficient are dropped. The ordering contract is only
    /// checked in debug builds, use [`Poly::try_from_terms`] for untrusted
    /// input.
    ///
    /// # Example
    ///
    /// ```
    /// use termpoly::Poly;
    ///
    /// // 4x^5 - 2x^3 + 2x + 3
    /// let p = Poly::<f32>::from_terms([(4.0, 5), (-2.0, 3), (2.0, 1), (3.0, 0)]);
    /// assert_eq!(p.degree(), Some(5));
    /// assert_eq!(p.eval(1.0), 7.0);
    /// ```
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        let terms: Vec<Term<T>> = terms
            .into_iter()
            .filter(|(coeff, _)| !coeff.is_zero())
            .map(|(coeff, degree)| Term::new(coeff, degree))
            .collect();
        Self::from_raw(terms)
    }

    /// Build a polynomial from `(coefficient, degree)` pairs, rejecting
    /// anything that is not already in canonical form.
    ///
    /// # Example
    ///
    /// ```
    /// use termpoly::{Poly, TermError};
    ///
    /// let p = Poly::<f32>::try_from_terms([(1.0, 2), (1.0, 0)]);
    /// assert!(p.is_ok());
    ///
    /// let err = Poly::<f32>::try_from_terms([(1.0, 0), (1.0, 2)]).unwrap_err();
    /// assert_eq!(err, TermError::NotDescending { previous: 0, found: 2 });
    /// ```
    pub fn try_from_terms<I>(terms: I) -> Result<Self, TermError>
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        let terms: Vec<Term<T>> = terms
            .into_iter()
            .map(|(coeff, degree)| Term::new(coeff, degree))
            .collect();
        utils::check_canonical(&terms)?;
        Ok(Self { terms })
    }

    /// Wrap a term list that is already canonical.
    pub(crate) fn from_raw(terms: Vec<Term<T>>) -> Self {
        debug_assert!(
            utils::is_canonical(&terms),
            "terms must have non-zero coefficients and strictly descending degrees"
        );
        Self { terms }
    }

    /// Create a constant polynomial.
    pub fn constant(c: T) -> Self {
        Self::monomial(c, 0)
    }

    /// Create the constant polynomial `1`.
    pub fn one() -> Self {
        Self::monomial(T::ONE, 0)
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self::monomial(T::ONE, 1)
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use termpoly::Poly;
    ///
    /// let m = Poly::monomial(3.0f32, 2); // 3x^2
    /// assert_eq!(m.degree(), Some(2));
    /// assert_eq!(m.eval(2.0), 12.0);
    /// ```
    pub fn monomial(c: T, n: u32) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![Term::new(c, n)],
            }
        }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of stored (non-zero) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.first().map(|t| t.degree)
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<T> {
        self.terms.first().map(|t| t.coeff)
    }

    /// Get the coefficient of `x^degree`, zero if no such term is stored.
    pub fn coeff(&self, degree: u32) -> T {
        self.terms
            .binary_search_by(|t| degree.cmp(&t.degree))
            .map(|i| self.terms[i].coeff)
            .unwrap_or(T::ZERO)
    }

    /// The terms, highest degree first.
    pub fn terms(&self) -> &[Term<T>] {
        &self.terms
    }

    /// Iterate over the terms, highest degree first.
    pub fn iter(&self) -> core::slice::Iter<'_, Term<T>> {
        self.terms.iter()
    }

    /// Take the term list, highest degree first.
    pub fn into_terms(self) -> Vec<Term<T>> {
        self.terms
    }

    /// Evaluate the polynomial at a point.
    ///
    /// Sums `coeff * x^degree` over the stored terms in a single pass; each
    /// power is computed by square-and-multiply, so cost depends on the
    /// number of terms and the logarithm of each degree, never on the
    /// count of absent terms.
    ///
    /// # Example
    ///
    /// ```
    /// use termpoly::Poly;
    ///
    /// // p(x) = 4x^5 - 2x^3 + 2x + 3
    /// let p = Poly::<f32>::from_terms([(4.0, 5), (-2.0, 3), (2.0, 1), (3.0, 0)]);
    /// assert_eq!(p.eval(1.0), 7.0);
    /// assert_eq!(p.eval(0.0), 3.0);
    /// ```
    pub fn eval(&self, x: T) -> T {
        self.terms.iter().fold(T::ZERO, |acc, t| acc + t.eval(x))
    }

    /// Multiply two polynomials.
    ///
    /// Each term of `self` is multiplied against every term of `other`,
    /// giving one row that is already in descending order; the row is then
    /// merged into the running result with the same merge that implements
    /// addition, which takes care of colliding degrees and cancellations.
    ///
    /// # Panics
    ///
    /// Panics if the degree of the product does not fit in a `u32`.
    ///
    /// # Example
    ///
    /// ```
    /// use termpoly::Poly;
    ///
    /// // (x + 1)(x - 1) = x^2 - 1
    /// let a = Poly::<f32>::from_terms([(1.0, 1), (1.0, 0)]);
    /// let b = Poly::<f32>::from_terms([(1.0, 1), (-1.0, 0)]);
    /// assert_eq!(a.multiply(&b), Poly::from_terms([(1.0, 2), (-1.0, 0)]));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (Some(p), Some(q)) = (self.degree(), other.degree()) else {
            return Self::zero();
        };
        assert!(
            p.checked_add(q).is_some(),
            "product degree {} + {} overflows u32",
            p,
            q
        );

        let mut result = Vec::new();
        let mut row = Vec::with_capacity(other.terms.len());
        for a in &self.terms {
            row.clear();
            row.extend(
                other
                    .terms
                    .iter()
                    .map(|b| Term::new(a.coeff * b.coeff, a.degree + b.degree))
                    .filter(|t| !t.is_zero()),
            );
            result = merge(&result, &row);
        }

        Self::from_raw(result)
    }

    /// Flip the sign of every coefficient.
    pub fn negate(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(-t.coeff, t.degree))
                .collect(),
        }
    }

    /// Multiply every coefficient by a scalar.
    ///
    /// Products that come out as exactly zero are dropped.
    pub fn scale(&self, c: T) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::from_raw(
            self.terms
                .iter()
                .map(|t| Term::new(t.coeff * c, t.degree))
                .filter(|t| !t.is_zero())
                .collect(),
        )
    }
}

/// Merge two descending term lists into their sum.
///
/// Equal degrees are combined into one term, or dropped when the sum is
/// exactly zero. Otherwise the higher degree is emitted first, so the result
/// stays in descending order. Once either side runs out the remainder of the
/// other is copied as is.
fn merge<T: Scalar>(lhs: &[Term<T>], rhs: &[Term<T>]) -> Vec<Term<T>> {
    let mut terms = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);

    while i < lhs.len() && j < rhs.len() {
        let (a, b) = (lhs[i], rhs[j]);
        match a.degree.cmp(&b.degree) {
            Ordering::Greater => {
                terms.push(a);
                i += 1;
            }
            Ordering::Less => {
                terms.push(b);
                j += 1;
            }
            Ordering::Equal => {
                let coeff = a.coeff + b.coeff;
                if !coeff.is_zero() {
                    terms.push(Term::new(coeff, a.degree));
                }
                i += 1;
                j += 1;
            }
        }
    }

    terms.extend_from_slice(&lhs[i..]);
    terms.extend_from_slice(&rhs[j..]);
    terms
}

impl<T: Scalar> Default for Poly<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<Term<T>> for Poly<T> {
    fn from(term: Term<T>) -> Self {
        Self::monomial(term.coeff, term.degree)
    }
}

impl<'a, T> IntoIterator for &'a Poly<T> {
    type Item = &'a Term<T>;
    type IntoIter = core::slice::Iter<'a, Term<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/* ---- Arithmetic operators ---- */

impl<T: Scalar> Add<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: &Poly<T>) -> Self::Output {
        Poly::from_raw(merge(&self.terms, &rhs.terms))
    }
}

impl<T: Scalar> Add for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Poly<T>> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Poly<T>) -> Self::Output {
        &self + rhs
    }
}

impl<T: Scalar> Add<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: Poly<T>) -> Self::Output {
        self + &rhs
    }
}

impl<T: Scalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for term in &mut self.terms {
            term.coeff = -term.coeff;
        }
        self
    }
}

impl<T: Scalar> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Scalar> Sub<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: &Poly<T>) -> Self::Output {
        self + &rhs.negate()
    }
}

impl<T: Scalar> Sub for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self + &(-rhs)
    }
}

impl<T: Scalar> Sub<&Poly<T>> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Poly<T>) -> Self::Output {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: Poly<T>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<T: Scalar> Mul<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Scalar> Mul for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<T: Scalar> Mul<&Poly<T>> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Scalar> Mul<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: Poly<T>) -> Self::Output {
        self.multiply(&rhs)
    }
}

// Scalar multiplication: polynomial * coefficient
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for Poly<$t> {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl Mul<$t> for &Poly<$t> {
                type Output = Poly<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.scale(rhs)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

/// Renders terms highest degree first, e.g. `4x^5 - 2x^3 + 2x + 3`.
impl<T: Scalar> fmt::Debug for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.terms.iter();
        let Some(first) = terms.next() else {
            return write!(f, "0");
        };

        write!(f, "{}", first)?;
        for term in terms {
            if term.coeff.is_negative() {
                write!(f, " - {}", Term::new(term.coeff.abs(), term.degree))?;
            } else {
                write!(f, " + {}", term)?;
            }
        }

        Ok(())
    }
}

impl<T: Scalar> fmt::Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize> serde::Serialize for Poly<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        // Serialize as a list of [coefficient, degree] pairs
        let mut seq = serializer.serialize_seq(Some(self.terms.len()))?;
        for term in &self.terms {
            seq.serialize_element(&(term.coeff, term.degree))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + serde::Deserialize<'de>> serde::Deserialize<'de> for Poly<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pairs = Vec::<(T, u32)>::deserialize(deserializer)?;
        Self::try_from_terms(pairs).map_err(serde::de::Error::custom)
    }
}
