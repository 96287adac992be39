use std::cmp::Ordering;

use tracing::trace;

use super::polynomial::Polynomial;
use super::{LexOrder, MonomialOrder};

impl Polynomial {
    /// Bring the polynomial into canonical form: like terms are merged,
    /// terms with a zero coefficient are removed and the remaining terms
    /// are put in descending lexicographic order.
    ///
    /// The chain never becomes empty: if every term cancels, the result is the
    /// zero polynomial, a single zero term with all-zero exponents.
    pub fn simplify(&mut self) {
        if self.is_empty() {
            return;
        }

        let nvars = self.nvars;
        let order = self.descending_order();

        let mut coefficients: Vec<f64> = Vec::with_capacity(self.nterms());
        let mut exponents: Vec<u32> = Vec::with_capacity(self.exponents.len());
        for i in order {
            let c = self.coefficients[i];
            let e = &self.exponents[i * nvars..(i + 1) * nvars];

            let n = coefficients.len();
            if n > 0 && &exponents[(n - 1) * nvars..] == e {
                coefficients[n - 1] += c;
            } else {
                coefficients.push(c);
                exponents.extend_from_slice(e);
            }
        }

        // remove the zero terms, including the ones produced by cancellation
        let mut n = 0;
        for i in 0..coefficients.len() {
            if coefficients[i] != 0. {
                coefficients[n] = coefficients[i];
                exponents.copy_within(i * nvars..(i + 1) * nvars, n * nvars);
                n += 1;
            }
        }
        coefficients.truncate(n);
        exponents.truncate(n * nvars);

        if coefficients.is_empty() {
            coefficients.push(0.);
            exponents.resize(nvars, 0);
        }

        trace!("simplified {} terms to {}", self.nterms(), coefficients.len());

        self.coefficients = coefficients;
        self.exponents = exponents;
        self.mark_modified();
    }

    /// Sort the terms in descending lexicographic order of their exponents.
    /// Terms with equal exponents keep their relative order and are not merged.
    pub fn lex_order(&mut self) {
        if self.nterms() < 2 {
            return;
        }

        let nvars = self.nvars;
        let order = self.descending_order();

        let coefficients: Vec<_> = order.iter().map(|i| self.coefficients[*i]).collect();
        let exponents: Vec<_> = order
            .iter()
            .flat_map(|i| &self.exponents[i * nvars..(i + 1) * nvars])
            .cloned()
            .collect();

        self.coefficients = coefficients;
        self.exponents = exponents;
        self.mark_modified();
    }

    /// Returns a canonical copy of `self`.
    pub fn simplified(&self) -> Polynomial {
        let mut p = Polynomial::new(self.nvars);
        p.coefficients = self.coefficients.clone();
        p.exponents = self.exponents.clone();
        p.simplify();
        p
    }

    /// Check if the polynomial is in canonical form: strictly descending
    /// exponents and only nonzero coefficients, or the zero polynomial.
    pub fn is_canonical(&self) -> bool {
        if self.is_empty() {
            return false;
        }

        if self.nterms() == 1 && self.coefficients[0] == 0. {
            return self.view(0).is_constant();
        }

        if self.coefficients.iter().any(|c| *c == 0.) {
            return false;
        }

        (1..self.nterms()).all(|t| {
            LexOrder::cmp(self.view(t - 1).exponents, self.view(t).exponents) == Ordering::Greater
        })
    }

    /// A stable permutation of the term indices that sorts the exponents in descending order.
    fn descending_order(&self) -> Vec<usize> {
        let mut order: Vec<_> = (0..self.nterms()).collect();
        order.sort_by(|a, b| LexOrder::cmp(self.view(*b).exponents, self.view(*a).exponents));
        order
    }
}
