use smallvec::SmallVec;

use super::polynomial::Polynomial;
use super::INLINED_EXPONENTS;

/// An owned monomial: a coefficient together with one exponent per variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponents: SmallVec<[u32; INLINED_EXPONENTS]>,
}

impl Term {
    #[inline]
    pub fn new(coefficient: f64, exponents: &[u32]) -> Term {
        Term {
            coefficient,
            exponents: SmallVec::from_slice(exponents),
        }
    }

    /// Returns `true` if every exponent is zero.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.exponents.iter().all(|e| *e == 0)
    }

    #[inline]
    pub fn degree(&self) -> u32 {
        super::monomial_degree(&self.exponents)
    }
}

impl<'a> From<TermView<'a>> for Term {
    fn from(view: TermView<'a>) -> Term {
        Term::new(*view.coefficient, view.exponents)
    }
}

/// View object for a term in a polynomial.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TermView<'a> {
    pub coefficient: &'a f64,
    pub exponents: &'a [u32],
}

impl<'a> TermView<'a> {
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.exponents.iter().all(|e| *e == 0)
    }

    pub fn to_owned(&self) -> Term {
        Term::from(*self)
    }
}

/// Iterator over terms in a polynomial, from the head of the chain to its tail.
pub struct TermViewIterator<'a> {
    poly: &'a Polynomial,
    index: usize,
}

impl<'a> Iterator for TermViewIterator<'a> {
    type Item = TermView<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.poly.nterms() {
            None
        } else {
            let view = self.poly.view(self.index);
            self.index += 1;
            Some(view)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.poly.nterms() - self.index;
        (rest, Some(rest))
    }
}

impl<'a> ExactSizeIterator for TermViewIterator<'a> {}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = TermView<'a>;
    type IntoIter = TermViewIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        TermViewIterator {
            poly: self,
            index: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Term;

    #[test]
    fn constant_term() {
        assert!(Term::new(4., &[0, 0, 0]).is_constant());
        assert!(!Term::new(4., &[0, 1, 0]).is_constant());
        assert_eq!(Term::new(1., &[1, 2, 0]).degree(), 3);
    }
}
