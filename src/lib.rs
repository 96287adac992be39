//! Sparse multivariate polynomials over the reals, built for expected-utility
//! computations in game theory.
//!
//! It supports arithmetic, canonical simplification, derivatives with a
//! memoized derivative chain, integration, evaluation and printing.
//!
//! For example:
//!
//! ```
//! use eupoly::poly::polynomial::Polynomial;
//!
//! let mut p: Polynomial = "3x^2 + 2x + 1".parse().unwrap();
//! assert_eq!(p.eval(2.), 17.);
//!
//! let d = p.get_derivative(1, 0).unwrap();
//! assert_eq!(d.to_string(), "6x + 2");
//!
//! // expected utility of a player with payoffs 0 and 3 for two strategies
//! let eu = Polynomial::from_eu_coefficients(1, &[0., 3.]).unwrap();
//! assert_eq!(eu.format_expected_utility(1, 1), "-3p_{1,1} + 3");
//! ```

pub mod error;
pub mod parser;
pub mod poly;
pub mod printer;

pub use error::{ParseError, PolynomialError};
pub use poly::polynomial::Polynomial;
pub use poly::term::{Term, TermView};
