//! Helpers for expected-utility polynomials, whose variables are the
//! mixed-strategy probabilities of a player.

use crate::error::PolynomialError;

use super::polynomial::Polynomial;

impl Polynomial {
    /// Fill in the payoffs `a_0, ..., a_{n-1}` of an expected utility
    /// `a_0 p_0 + ... + a_{n-2} p_{n-2} + a_{n-1} (1 - p_0 - ... - p_{n-2})`.
    ///
    /// Term `i < n - 1` becomes `(a_i - a_{n-1}) x_i` and the last term becomes the
    /// constant `a_{n-1}`. The number of payoffs must equal the number of terms,
    /// and there must be a variable for every term but the last.
    pub fn set_eu_coefficients(&mut self, payoffs: &[f64]) -> Result<(), PolynomialError> {
        let nterms = self.nterms();
        if payoffs.len() != nterms {
            return Err(PolynomialError::LengthMismatch {
                expected: nterms,
                found: payoffs.len(),
            });
        }
        if nterms == 0 {
            return Ok(());
        }
        if nterms - 1 > self.nvars {
            return Err(PolynomialError::DimensionMismatch {
                expected: nterms - 1,
                found: self.nvars,
            });
        }

        let nvars = self.nvars;
        let last = payoffs[nterms - 1];
        for (t, a) in payoffs.iter().enumerate() {
            let exps = &mut self.exponents[t * nvars..(t + 1) * nvars];
            exps.fill(0);
            if t < nterms - 1 {
                exps[t] = 1;
                self.coefficients[t] = a - last;
            } else {
                self.coefficients[t] = last;
            }
        }

        self.mark_modified();
        Ok(())
    }

    /// Build the expected utility for the payoffs `payoffs` in `nvars` variables,
    /// see [`Polynomial::set_eu_coefficients`].
    pub fn from_eu_coefficients(
        nvars: usize,
        payoffs: &[f64],
    ) -> Result<Polynomial, PolynomialError> {
        let mut p = Polynomial::new(nvars);
        for _ in payoffs {
            p.coefficients.push(0.);
            p.exponents.resize(p.exponents.len() + nvars, 0);
        }
        p.set_eu_coefficients(payoffs)?;
        Ok(p)
    }

    /// Assign the exponents of every term at once, one row per term.
    pub fn set_eu_exponents<R: AsRef<[u32]>>(&mut self, rows: &[R]) -> Result<(), PolynomialError> {
        if rows.len() != self.nterms() {
            return Err(PolynomialError::LengthMismatch {
                expected: self.nterms(),
                found: rows.len(),
            });
        }
        for row in rows {
            self.check_dimension(row.as_ref())?;
        }

        let nvars = self.nvars;
        for (t, row) in rows.iter().enumerate() {
            self.exponents[t * nvars..(t + 1) * nvars].copy_from_slice(row.as_ref());
        }

        self.mark_modified();
        Ok(())
    }

    /// The first variable with a nonzero exponent in the term at `index`,
    /// or `None` if the term is constant.
    pub fn non_zero_exponent(&self, index: usize) -> Result<Option<usize>, PolynomialError> {
        Ok(self.term_at(index)?.exponents.iter().position(|e| *e != 0))
    }
}
