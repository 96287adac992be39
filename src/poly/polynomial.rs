use std::fmt;

use crate::error::PolynomialError;

use super::cache::DerivativeCache;
use super::term::{Term, TermView};

/// Multivariate polynomial over the reals with a sparse term and dense exponent representation.
///
/// Terms are kept in an ordered chain. The chain is not sorted automatically:
/// call [`Polynomial::simplify`] to bring it into canonical form.
#[derive(Clone)]
pub struct Polynomial {
    // Data format: the i-th term is stored as coefficients[i] and
    // exponents[i * nvars .. (i + 1) * nvars].
    pub(crate) coefficients: Vec<f64>,
    pub(crate) exponents: Vec<u32>,
    pub(crate) nvars: usize,
    pub(crate) total_degree: Option<u32>,
    pub(crate) version: u64,
    pub(crate) cache: DerivativeCache,
    // set for a `Default` polynomial until the first term fixes `nvars`
    pub(crate) unbound: bool,
}

impl Default for Polynomial {
    /// An uninitialized polynomial: no terms and no variables. The first
    /// appended or inserted term determines the number of variables.
    fn default() -> Self {
        let mut p = Self::new(0);
        p.unbound = true;
        p
    }
}

impl Polynomial {
    /// Constructs a polynomial in `nvars` variables without any terms. Terms
    /// can be added with [`Polynomial::append_term`] and [`Polynomial::insert_term`].
    #[inline]
    pub fn new(nvars: usize) -> Self {
        Self {
            coefficients: vec![],
            exponents: vec![],
            nvars,
            total_degree: None,
            version: 0,
            cache: DerivativeCache::default(),
            unbound: false,
        }
    }

    /// Constructs a polynomial with room for `cap` terms.
    #[inline]
    pub fn with_capacity(nvars: usize, cap: usize) -> Self {
        let mut p = Self::new(nvars);
        p.coefficients.reserve(cap);
        p.exponents.reserve(cap * nvars);
        p
    }

    /// Constructs the zero polynomial: a single term with coefficient 0 and all-zero exponents.
    #[inline]
    pub fn zero(nvars: usize) -> Self {
        Self::constant(nvars, 0.)
    }

    /// Constructs a constant polynomial.
    #[inline]
    pub fn constant(nvars: usize, coefficient: f64) -> Self {
        let mut p = Self::new(nvars);
        p.coefficients.push(coefficient);
        p.exponents.resize(nvars, 0);
        p.total_degree = Some(0);
        p
    }

    /// Constructs the polynomial `x_var`.
    pub fn variable(nvars: usize, var: usize) -> Result<Self, PolynomialError> {
        if var >= nvars {
            return Err(PolynomialError::VariableOutOfRange { var, nvars });
        }

        let mut p = Self::new(nvars);
        p.coefficients.push(1.);
        p.exponents.resize(nvars, 0);
        p.exponents[var] = 1;
        p.total_degree = Some(1);
        Ok(p)
    }

    /// Constructs the template `0·x_var^(nterms-1) + 0·x_var^(nterms-2) + ... + 0`
    /// in `nvars` variables. The coefficients are filled in afterwards, for example
    /// with [`Polynomial::set_eu_coefficients`].
    pub fn template(nterms: usize, nvars: usize, var: usize) -> Result<Self, PolynomialError> {
        if var >= nvars {
            return Err(PolynomialError::VariableOutOfRange { var, nvars });
        }

        let mut p = Self::with_capacity(nvars, nterms);
        for t in 0..nterms {
            p.coefficients.push(0.);
            let start = p.exponents.len();
            p.exponents.resize(start + nvars, 0);
            p.exponents[start + var] = (nterms - 1 - t) as u32;
        }
        Ok(p)
    }

    /// Constructs a polynomial from a list of terms, keeping their order.
    pub fn from_terms(nvars: usize, terms: &[Term]) -> Result<Self, PolynomialError> {
        let mut p = Self::with_capacity(nvars, terms.len());
        for t in terms {
            p.append_term(t.coefficient, &t.exponents)?;
        }
        Ok(p)
    }

    /// Returns the number of terms in the chain.
    #[inline]
    pub fn nterms(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the number of variables in the polynomial.
    #[inline]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    /// Returns `true` if the chain has no terms yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns `true` if all coefficients are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0.)
    }

    /// The cached total degree, or `None` if it has not been computed
    /// since the last mutation.
    #[inline]
    pub fn total_degree(&self) -> Option<u32> {
        self.total_degree
    }

    /// Recompute and cache the maximum over all terms of the sum of its exponents.
    pub fn compute_total_degree(&mut self) -> u32 {
        let deg = self.degree();
        self.total_degree = Some(deg);
        deg
    }

    /// The total degree, computed without touching the cache.
    pub(crate) fn degree(&self) -> u32 {
        self.into_iter()
            .map(|t| super::monomial_degree(t.exponents))
            .max()
            .unwrap_or(0)
    }

    /// A counter that increases with every mutation of the polynomial.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    pub(crate) fn view(&self, index: usize) -> TermView<'_> {
        TermView {
            coefficient: &self.coefficients[index],
            exponents: &self.exponents[index * self.nvars..(index + 1) * self.nvars],
        }
    }

    /// Returns the term at position `index` in the chain.
    pub fn term_at(&self, index: usize) -> Result<TermView<'_>, PolynomialError> {
        self.check_index(index)?;
        Ok(self.view(index))
    }

    pub fn coefficient(&self, index: usize) -> Result<f64, PolynomialError> {
        self.check_index(index)?;
        Ok(self.coefficients[index])
    }

    pub fn exponents(&self, index: usize) -> Result<&[u32], PolynomialError> {
        self.check_index(index)?;
        Ok(self.view(index).exponents)
    }

    pub fn exponent(&self, index: usize, var: usize) -> Result<u32, PolynomialError> {
        self.check_index(index)?;
        self.check_var(var)?;
        Ok(self.exponents[index * self.nvars + var])
    }

    pub fn set_coefficient(
        &mut self,
        index: usize,
        coefficient: f64,
    ) -> Result<(), PolynomialError> {
        self.check_index(index)?;
        self.coefficients[index] = coefficient;
        self.mark_modified();
        Ok(())
    }

    pub fn set_exponent(
        &mut self,
        index: usize,
        var: usize,
        exponent: u32,
    ) -> Result<(), PolynomialError> {
        self.check_index(index)?;
        self.check_var(var)?;
        self.exponents[index * self.nvars + var] = exponent;
        self.mark_modified();
        Ok(())
    }

    pub fn set_exponents(
        &mut self,
        index: usize,
        exponents: &[u32],
    ) -> Result<(), PolynomialError> {
        self.check_index(index)?;
        self.check_dimension(exponents)?;
        let nvars = self.nvars;
        self.exponents[index * nvars..(index + 1) * nvars].copy_from_slice(exponents);
        self.mark_modified();
        Ok(())
    }

    /// Overwrite the coefficient and exponents of the term at `index`.
    pub fn set_term(&mut self, index: usize, term: &Term) -> Result<(), PolynomialError> {
        self.check_index(index)?;
        self.check_dimension(&term.exponents)?;
        let nvars = self.nvars;
        self.coefficients[index] = term.coefficient;
        self.exponents[index * nvars..(index + 1) * nvars].copy_from_slice(&term.exponents);
        self.mark_modified();
        Ok(())
    }

    /// Appends a term at the tail of the chain.
    ///
    /// A polynomial created with [`Default`] has no variables yet; the first
    /// appended term fixes the number of variables.
    pub fn append_term(
        &mut self,
        coefficient: f64,
        exponents: &[u32],
    ) -> Result<(), PolynomialError> {
        if self.unbound {
            self.nvars = exponents.len();
            self.unbound = false;
        }
        self.check_dimension(exponents)?;

        self.coefficients.push(coefficient);
        self.exponents.extend_from_slice(exponents);
        self.mark_modified();
        Ok(())
    }

    /// Splices a new term into the chain so that it ends up at position `index`.
    /// Inserting at `nterms()` appends.
    pub fn insert_term(
        &mut self,
        index: usize,
        exponents: &[u32],
        coefficient: f64,
    ) -> Result<(), PolynomialError> {
        if index > self.nterms() {
            return Err(PolynomialError::TermIndexOutOfRange {
                index,
                nterms: self.nterms(),
            });
        }
        if self.unbound {
            self.nvars = exponents.len();
            self.unbound = false;
        }
        self.check_dimension(exponents)?;

        self.coefficients.insert(index, coefficient);
        let i = index * self.nvars;
        self.exponents.splice(i..i, exponents.iter().cloned());
        self.mark_modified();
        Ok(())
    }

    /// Removes the term at `index` and returns it. Every later term shifts down by one.
    pub fn remove_term(&mut self, index: usize) -> Result<Term, PolynomialError> {
        self.check_index(index)?;

        let term = self.view(index).to_owned();
        self.coefficients.remove(index);
        self.exponents.drain(index * self.nvars..(index + 1) * self.nvars);
        self.mark_modified();
        Ok(term)
    }

    /// Removes the term under `cursor` and steps the cursor back by one, so
    /// that a loop that advances the cursor afterwards visits the term that
    /// moved into the freed position.
    pub fn remove_term_at_cursor(&mut self, cursor: &mut isize) -> Result<Term, PolynomialError> {
        let index = usize::try_from(*cursor).map_err(|_| PolynomialError::TermIndexOutOfRange {
            index: usize::MAX,
            nterms: self.nterms(),
        })?;

        let term = self.remove_term(index)?;
        *cursor -= 1;
        Ok(term)
    }

    /// Remove all terms. The number of variables is kept.
    pub fn clear(&mut self) {
        self.coefficients.clear();
        self.exponents.clear();
        self.mark_modified();
    }

    /// Record a mutation: the cached degree is dropped and
    /// cached derivatives become stale.
    #[inline]
    pub(crate) fn mark_modified(&mut self) {
        self.version += 1;
        self.total_degree = None;
    }

    #[inline]
    pub(crate) fn check_index(&self, index: usize) -> Result<(), PolynomialError> {
        if index >= self.nterms() {
            Err(PolynomialError::TermIndexOutOfRange {
                index,
                nterms: self.nterms(),
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    pub(crate) fn check_var(&self, var: usize) -> Result<(), PolynomialError> {
        if var >= self.nvars {
            Err(PolynomialError::VariableOutOfRange {
                var,
                nvars: self.nvars,
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    pub(crate) fn check_dimension(&self, exponents: &[u32]) -> Result<(), PolynomialError> {
        if exponents.len() != self.nvars {
            Err(PolynomialError::DimensionMismatch {
                expected: self.nvars,
                found: exponents.len(),
            })
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        let mut first = true;
        write!(f, "[ ")?;
        for term in self {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{{ {:?}, {:?} }}", term.coefficient, term.exponents)?;
        }
        write!(f, " ]")
    }
}
