use eupoly::{Polynomial, Term};
use proptest::prelude::*;

/// Polynomials with small integer coefficients, so that sums are exact.
fn polynomial(nvars: usize) -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(
        (-5i32..=5, prop::collection::vec(0u32..4, nvars)),
        1..6,
    )
    .prop_map(move |terms| {
        let terms: Vec<_> = terms
            .iter()
            .map(|(c, e)| Term::new(*c as f64, e))
            .collect();
        Polynomial::from_terms(nvars, &terms).unwrap()
    })
}

proptest! {
    #[test]
    fn addition_commutes(p in polynomial(2), q in polynomial(2)) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    #[test]
    fn addition_associates(p in polynomial(2), q in polynomial(2), r in polynomial(2)) {
        prop_assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));
    }

    #[test]
    fn multiplication_commutes(p in polynomial(2), q in polynomial(2)) {
        prop_assert_eq!(&p * &q, &q * &p);
    }

    #[test]
    fn subtraction_cancels(p in polynomial(3)) {
        let z = &p - &p;
        prop_assert!(z.is_zero());
        prop_assert_eq!(z.nterms(), 1);
    }

    #[test]
    fn simplify_is_idempotent(p in polynomial(3)) {
        let mut once = p.clone();
        once.simplify();
        prop_assert!(once.is_canonical());

        let mut twice = once.clone();
        twice.simplify();
        prop_assert_eq!(format!("{:?}", once), format!("{:?}", twice));
    }

    #[test]
    fn derivative_of_constant_is_zero(c in -100i32..100, nvars in 1usize..4) {
        let p = Polynomial::constant(nvars, c as f64);
        for var in 0..nvars {
            let d = p.derivative(var).unwrap();
            prop_assert!(d.is_zero());
            prop_assert_eq!(d.nterms(), 1);
        }
    }

    #[test]
    fn integrate_then_differentiate(p in polynomial(1)) {
        let mut p = p;
        p.simplify();
        let d = p.integrate(0).unwrap().derivative(0).unwrap();

        prop_assert_eq!(p.nterms(), d.nterms());
        for (a, b) in p.into_iter().zip(&d) {
            prop_assert_eq!(a.exponents, b.exponents);
            prop_assert!((a.coefficient - b.coefficient).abs() < 1e-9);
        }
    }

    #[test]
    fn evaluation_is_additive(p in polynomial(2), q in polynomial(2), v in -2i32..=2) {
        let v = v as f64;
        prop_assert_eq!((&p + &q).eval(v), p.eval(v) + q.eval(v));
    }
}
