use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::PolynomialError;

use super::polynomial::Polynomial;
use super::{LexOrder, MonomialOrder};

impl Polynomial {
    /// Add two polynomials. Like terms are combined and the result is in canonical form.
    pub fn checked_add(&self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.check_same_nvars(other)?;
        Ok(merge(&self.simplified(), &other.simplified(), 1.))
    }

    /// Subtract `other` from `self`. The result is in canonical form.
    pub fn checked_sub(&self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.check_same_nvars(other)?;
        Ok(merge(&self.simplified(), &other.simplified(), -1.))
    }

    /// Multiply two polynomials term by term. The result is in canonical form.
    pub fn checked_mul(&self, other: &Polynomial) -> Result<Polynomial, PolynomialError> {
        self.check_same_nvars(other)?;

        let nvars = self.nvars;
        let mut res = Polynomial::with_capacity(nvars, self.nterms() * other.nterms());
        for a in self {
            for b in other {
                res.coefficients.push(a.coefficient * b.coefficient);
                for (var, (e1, e2)) in a.exponents.iter().zip(b.exponents).enumerate() {
                    let e = e1
                        .checked_add(*e2)
                        .ok_or(PolynomialError::ExponentOverflow { var })?;
                    res.exponents.push(e);
                }
            }
        }

        if res.is_empty() {
            return Ok(Polynomial::zero(nvars));
        }

        res.simplify();
        Ok(res)
    }

    fn check_same_nvars(&self, other: &Polynomial) -> Result<(), PolynomialError> {
        if self.nvars != other.nvars {
            Err(PolynomialError::DimensionMismatch {
                expected: self.nvars,
                found: other.nvars,
            })
        } else {
            Ok(())
        }
    }
}

/// Merge two canonical polynomials, scaling the terms of `b` by `sign`.
/// Terms whose coefficients cancel are dropped.
fn merge(a: &Polynomial, b: &Polynomial, sign: f64) -> Polynomial {
    let nvars = a.nvars;
    let mut res = Polynomial::with_capacity(nvars, a.nterms() + b.nterms());

    macro_rules! insert_term {
        ($coeff:expr, $exponents:expr) => {
            let c = $coeff;
            if c != 0. {
                res.coefficients.push(c);
                res.exponents.extend_from_slice($exponents);
            }
        };
    }

    let mut i = 0;
    let mut j = 0;
    while i < a.nterms() && j < b.nterms() {
        let (ta, tb) = (a.view(i), b.view(j));
        match LexOrder::cmp(ta.exponents, tb.exponents) {
            Ordering::Greater => {
                insert_term!(*ta.coefficient, ta.exponents);
                i += 1;
            }
            Ordering::Less => {
                insert_term!(sign * tb.coefficient, tb.exponents);
                j += 1;
            }
            Ordering::Equal => {
                insert_term!(ta.coefficient + sign * tb.coefficient, ta.exponents);
                i += 1;
                j += 1;
            }
        }
    }

    for t in (i..a.nterms()).map(|i| a.view(i)) {
        insert_term!(*t.coefficient, t.exponents);
    }

    for t in (j..b.nterms()).map(|j| b.view(j)) {
        insert_term!(sign * t.coefficient, t.exponents);
    }

    if res.is_empty() {
        return Polynomial::zero(nvars);
    }

    res
}

impl<'a, 'b> Add<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'a Polynomial) -> Polynomial {
        self.checked_add(other).unwrap_or_else(|e| panic!("Cannot add polynomials: {}", e))
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        &self + &other
    }
}

impl<'a, 'b> Sub<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &'a Polynomial) -> Polynomial {
        self.checked_sub(other).unwrap_or_else(|e| panic!("Cannot subtract polynomials: {}", e))
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        &self - &other
    }
}

impl<'a, 'b> Mul<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &'a Polynomial) -> Polynomial {
        self.checked_mul(other).unwrap_or_else(|e| panic!("Cannot multiply polynomials: {}", e))
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        &self * &other
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(mut self) -> Polynomial {
        for c in &mut self.coefficients {
            *c = -*c;
        }
        self.mark_modified();
        self
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.clone().neg()
    }
}

impl PartialEq for Polynomial {
    /// Two polynomials are equal if their canonical forms have the same total
    /// degree and the same terms in the same order.
    fn eq(&self, other: &Self) -> bool {
        if self.nvars != other.nvars {
            return false;
        }

        let a = self.simplified();
        let b = other.simplified();
        a.degree() == b.degree()
            && a.nterms() == b.nterms()
            && a.coefficients == b.coefficients
            && a.exponents == b.exponents
    }
}

impl PartialOrd for Polynomial {
    /// An ordering of polynomials by total degree and then by their canonical
    /// term sequence. It says nothing about the magnitude of the polynomials.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.nvars != other.nvars {
            return None;
        }

        let a = self.simplified();
        let b = other.simplified();

        match a.degree().cmp(&b.degree()) {
            Ordering::Equal => {}
            x => return Some(x),
        }

        for (ta, tb) in a.into_iter().zip(&b) {
            match LexOrder::cmp(ta.exponents, tb.exponents) {
                Ordering::Equal => {}
                x => return Some(x),
            }

            match ta.coefficient.partial_cmp(tb.coefficient)? {
                Ordering::Equal => {}
                x => return Some(x),
            }
        }

        Some(a.nterms().cmp(&b.nterms()))
    }
}

#[cfg(test)]
mod test {
    use crate::error::PolynomialError;
    use crate::poly::polynomial::Polynomial;
    use crate::poly::term::Term;

    fn poly(nvars: usize, terms: &[(f64, &[u32])]) -> Polynomial {
        let terms: Vec<_> = terms.iter().map(|(c, e)| Term::new(*c, e)).collect();
        Polynomial::from_terms(nvars, &terms).unwrap()
    }

    #[test]
    fn add() {
        let a = poly(2, &[(1., &[1, 0]), (2., &[0, 1]), (3., &[0, 0])]);
        let b = poly(2, &[(-1., &[1, 0]), (4., &[2, 0])]);
        let r = &a + &b;

        assert!(r.is_canonical());
        assert_eq!(r, poly(2, &[(4., &[2, 0]), (2., &[0, 1]), (3., &[0, 0])]));
        assert_eq!(r.nterms(), 3);
    }

    #[test]
    fn sub_to_zero() {
        let a: Polynomial = "3x^2+2x+1".parse().unwrap();
        let r = &a - &a;
        assert_eq!(r.nterms(), 1);
        assert!(r.is_zero());
        assert_eq!(r, Polynomial::zero(1));
    }

    #[test]
    fn mul() {
        let a: Polynomial = "x+1".parse().unwrap();
        let b: Polynomial = "x+-1".parse().unwrap();
        let r = &a * &b;
        assert_eq!(r, "x^2+-1".parse::<Polynomial>().unwrap());
        assert!(r.is_canonical());

        let c = poly(2, &[(2., &[1, 0]), (1., &[0, 1])]);
        let d = poly(2, &[(3., &[0, 1])]);
        assert_eq!(&c * &d, poly(2, &[(6., &[1, 1]), (3., &[0, 2])]));
    }

    #[test]
    fn mul_by_empty_is_zero() {
        let a: Polynomial = "x+1".parse().unwrap();
        let empty = Polynomial::new(1);

        let r = &empty * &a;
        assert_eq!(r.nterms(), 1);
        assert!(r.is_zero());
        assert!(r.is_canonical());
        assert_eq!(r.to_string(), "0");

        let mut b = a.clone();
        b.remove_term(1).unwrap();
        b.remove_term(0).unwrap();
        let r = a.checked_mul(&b).unwrap();
        assert_eq!(r.to_string(), "0");
        assert_eq!(r.nterms(), (&a - &a).nterms());
    }

    #[test]
    fn dimension_mismatch() {
        let a = Polynomial::zero(1);
        let b = Polynomial::zero(2);
        assert_eq!(
            a.checked_add(&b).unwrap_err(),
            PolynomialError::DimensionMismatch {
                expected: 1,
                found: 2
            }
        );
        assert!(a.checked_mul(&b).is_err());
        assert!(a.checked_sub(&b).is_err());
    }

    #[test]
    #[should_panic]
    fn operator_panics_on_mismatch() {
        let _ = &Polynomial::zero(1) + &Polynomial::zero(3);
    }

    #[test]
    fn operands_are_not_modified() {
        let a = poly(1, &[(1., &[0]), (2., &[1])]);
        let b = poly(1, &[(1., &[2])]);
        let version = a.version();
        let _ = &a + &b;
        assert_eq!(a.version(), version);
        assert_eq!(a.coefficient(0).unwrap(), 1.);
    }

    #[test]
    fn equality_ignores_term_order() {
        let a = poly(1, &[(1., &[0]), (2., &[1])]);
        let b = poly(1, &[(2., &[1]), (1., &[0])]);
        assert_eq!(a, b);
        assert_ne!(a, poly(1, &[(2., &[1])]));
        assert_ne!(a, poly(1, &[(2., &[1]), (2., &[0])]));
    }

    #[test]
    fn ordering() {
        let a: Polynomial = "x^2".parse().unwrap();
        let b: Polynomial = "5x+3".parse().unwrap();
        let c: Polynomial = "5x+4".parse().unwrap();
        assert!(a > b);
        assert!(b < c);
        assert_eq!(b.partial_cmp(&b.clone()), Some(std::cmp::Ordering::Equal));
        assert_eq!(a.partial_cmp(&Polynomial::zero(2)), None);
    }

    #[test]
    fn neg() {
        let a: Polynomial = "2x+-1".parse().unwrap();
        assert_eq!(-&a, "-2x+1".parse::<Polynomial>().unwrap());
    }
}
