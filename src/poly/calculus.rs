use crate::error::PolynomialError;

use super::polynomial::Polynomial;

impl Polynomial {
    /// Take the derivative of the polynomial w.r.t. the variable `var`, treating
    /// each term as the monomial contribution of a single variable.
    ///
    /// Every term in which `var` occurs has its coefficient multiplied by the
    /// exponent of `var`, that exponent lowered by one and all other exponents
    /// set to zero. Terms in which `var` does not occur are removed. If no term
    /// survives, the result is the zero polynomial.
    ///
    /// This is only the partial derivative when every term depends on at most
    /// one variable, as in expected-utility polynomials. Use
    /// [`Polynomial::partial_derivative`] for general multivariate polynomials.
    pub fn derivative(&self, var: usize) -> Result<Polynomial, PolynomialError> {
        self.check_var(var)?;

        let mut res = Polynomial::with_capacity(self.nvars, self.nterms());
        let mut exp = vec![0; self.nvars];
        for t in self {
            let pow = t.exponents[var];
            if pow == 0 {
                continue;
            }

            exp.fill(0);
            exp[var] = pow - 1;
            res.coefficients.push(t.coefficient * pow as f64);
            res.exponents.extend_from_slice(&exp);
        }

        if res.is_empty() {
            return Ok(Polynomial::zero(self.nvars));
        }

        Ok(res)
    }

    /// Take the partial derivative of the polynomial w.r.t. the variable `var`.
    /// The exponents of the other variables are left untouched.
    pub fn partial_derivative(&self, var: usize) -> Result<Polynomial, PolynomialError> {
        self.check_var(var)?;

        let mut res = Polynomial::with_capacity(self.nvars, self.nterms());
        for t in self {
            let pow = t.exponents[var];
            if pow == 0 {
                continue;
            }

            let start = res.exponents.len();
            res.exponents.extend_from_slice(t.exponents);
            res.exponents[start + var] = pow - 1;
            res.coefficients.push(t.coefficient * pow as f64);
        }

        if res.is_empty() {
            return Ok(Polynomial::zero(self.nvars));
        }

        Ok(res)
    }

    /// Integrate the polynomial w.r.t. the variable `var`. The exponent of `var`
    /// is raised by one in every term and the coefficient divided by the new exponent.
    ///
    /// The constant of integration is not included.
    pub fn integrate(&self, var: usize) -> Result<Polynomial, PolynomialError> {
        self.check_var(var)?;

        let mut res = Polynomial::with_capacity(self.nvars, self.nterms());
        for t in self {
            let pow = t.exponents[var]
                .checked_add(1)
                .ok_or(PolynomialError::ExponentOverflow { var })?;
            if pow == 0 {
                return Err(PolynomialError::DegenerateIntegration { var });
            }

            let start = res.exponents.len();
            res.exponents.extend_from_slice(t.exponents);
            res.exponents[start + var] = pow;
            res.coefficients.push(t.coefficient / pow as f64);
        }

        Ok(res)
    }

    /// Integrate over the interval `[a, b]` in `var` by evaluating the
    /// antiderivative at both endpoints. Since evaluation substitutes the same
    /// value in every variable, the result is only meaningful when the
    /// polynomial depends on `var` alone.
    pub fn integrate_over_interval(
        &self,
        a: f64,
        b: f64,
        var: usize,
    ) -> Result<f64, PolynomialError> {
        let antiderivative = self.integrate(var)?;
        Ok(antiderivative.eval(b) - antiderivative.eval(a))
    }

    /// Evaluate the polynomial by substituting `value` for every variable.
    pub fn eval(&self, value: f64) -> f64 {
        let mut res = 0.;
        for t in self {
            let mut c = *t.coefficient;
            for e in t.exponents {
                if *e != 0 {
                    c *= match i32::try_from(*e) {
                        Ok(e) => value.powi(e),
                        Err(_) => value.powf(*e as f64),
                    };
                }
            }
            res += c;
        }
        res
    }

    /// Returns `true` if no term contains a variable.
    pub fn is_constant(&self) -> bool {
        self.into_iter().all(|t| t.is_constant())
    }

    /// Returns `true` if the term at `index` contains no variable.
    pub fn is_constant_term(&self, index: usize) -> Result<bool, PolynomialError> {
        Ok(self.term_at(index)?.is_constant())
    }

    /// Returns `true` if every term contains at most one variable.
    pub fn is_linear(&self) -> bool {
        self.into_iter()
            .all(|t| t.exponents.iter().filter(|e| **e != 0).count() <= 1)
    }
}
