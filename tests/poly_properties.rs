use std::collections::BTreeMap;
use std::io::Cursor;

use proptest::prelude::*;

use termpoly::{utils, Poly};

type P = Poly<f32>;

// Small integer coefficients keep every sum and product exact in f32, so
// the algebraic laws can be checked with plain equality.
fn arb_coeff() -> impl Strategy<Value = f32> {
    prop_oneof![-9i32..=-1, 1i32..=9].prop_map(|c| c as f32)
}

fn arb_poly() -> impl Strategy<Value = P> {
    prop::collection::btree_map(0u32..24, arb_coeff(), 0..8).prop_map(|terms: BTreeMap<u32, f32>| {
        P::from_terms(terms.into_iter().rev().map(|(degree, coeff)| (coeff, degree)))
    })
}

fn arb_point() -> impl Strategy<Value = f32> {
    -1.5f32..1.5f32
}

/// Sum of `|coeff| * |x|^degree`, the scale of rounding error in `eval`.
fn magnitude(p: &P, x: f32) -> f32 {
    p.iter().map(|t| t.coeff.abs() * x.abs().powi(t.degree as i32)).sum()
}

fn close(lhs: f32, rhs: f32, scale: f32) -> bool {
    (lhs - rhs).abs() <= 1e-4 * scale + 1e-5
}

// ===== Addition properties =====

proptest! {
    #[test]
    fn addition_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }
}

proptest! {
    #[test]
    fn addition_associative(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }
}

proptest! {
    #[test]
    fn additive_identity(a in arb_poly()) {
        prop_assert_eq!(&a + &P::zero(), a.clone());
        prop_assert_eq!(&P::zero() + &a, a);
    }
}

proptest! {
    #[test]
    fn additive_inverse(a in arb_poly()) {
        prop_assert!((&a + &a.negate()).is_zero());
        prop_assert!((&a - &a).is_zero());
    }
}

proptest! {
    #[test]
    fn double_negation(a in arb_poly()) {
        prop_assert_eq!(-(-a.clone()), a);
    }
}

// ===== Multiplication properties =====

proptest! {
    #[test]
    fn multiplication_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }
}

proptest! {
    #[test]
    fn multiplicative_identity(a in arb_poly()) {
        let one = P::from_terms([(1.0, 0)]);
        prop_assert_eq!(&a * &one, a);
    }
}

proptest! {
    #[test]
    fn zero_absorbs(a in arb_poly()) {
        prop_assert!((&a * &P::zero()).is_zero());
        prop_assert!((&P::zero() * &a).is_zero());
    }
}

proptest! {
    #[test]
    fn distributive(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }
}

proptest! {
    #[test]
    fn product_degree_is_sum(a in arb_poly(), b in arb_poly()) {
        let prod = &a * &b;
        match (a.degree(), b.degree()) {
            (Some(p), Some(q)) => prop_assert_eq!(prod.degree(), Some(p + q)),
            _ => prop_assert!(prod.is_zero()),
        }
    }
}

// ===== Canonical form of results =====

proptest! {
    #[test]
    fn results_are_canonical(a in arb_poly(), b in arb_poly()) {
        for result in [&a + &b, &a - &b, &a * &b, a.negate(), a.scale(-2.0)] {
            prop_assert!(utils::is_canonical(result.terms()), "{:?}", result);
            prop_assert!(utils::check_canonical(result.terms()).is_ok());
        }
    }
}

// ===== Evaluation =====

proptest! {
    #[test]
    fn evaluation_linear(a in arb_poly(), b in arb_poly(), x in arb_point()) {
        let lhs = (&a + &b).eval(x);
        let rhs = a.eval(x) + b.eval(x);
        let scale = magnitude(&a, x) + magnitude(&b, x);
        prop_assert!(close(lhs, rhs, scale), "{} != {}", lhs, rhs);
    }
}

proptest! {
    #[test]
    fn evaluation_multiplicative(a in arb_poly(), b in arb_poly(), x in arb_point()) {
        let lhs = (&a * &b).eval(x);
        let rhs = a.eval(x) * b.eval(x);
        let scale = magnitude(&a, x) * magnitude(&b, x);
        prop_assert!(close(lhs, rhs, scale), "{} != {}", lhs, rhs);
    }
}

proptest! {
    #[test]
    fn evaluation_at_one_sums_coefficients(a in arb_poly()) {
        let sum: f32 = a.iter().map(|t| t.coeff).sum();
        prop_assert_eq!(a.eval(1.0), sum);
    }
}

// ===== Term lists =====

proptest! {
    #[test]
    fn term_list_roundtrip(a in arb_poly()) {
        let mut out = Vec::new();
        a.write_to(&mut out).unwrap();
        let b = P::from_reader(Cursor::new(out)).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn sum_cancels_to_linear() {
    let a = P::from_terms([(4.0, 5), (-2.0, 3), (2.0, 1), (3.0, 0)]);
    let b = P::from_terms([(-4.0, 5), (2.0, 3)]);
    assert_eq!(&a + &b, P::from_terms([(2.0, 1), (3.0, 0)]));
}

#[test]
fn difference_of_squares() {
    let a = P::from_terms([(1.0, 1), (1.0, 0)]);
    let b = P::from_terms([(1.0, 1), (-1.0, 0)]);
    assert_eq!(&a * &b, P::from_terms([(1.0, 2), (-1.0, 0)]));
}

#[test]
fn evaluates_at_one() {
    let p = P::from_terms([(4.0, 5), (-2.0, 3), (2.0, 1), (3.0, 0)]);
    assert_eq!(p.eval(1.0), 7.0);
}
