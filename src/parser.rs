//! Parser for univariate polynomials written as `ax^n + bx^m + ... + z`.
//!
//! Terms are separated by `+`, a negative coefficient is written as
//! `+-3x`. A term without `^` has exponent 1, or 0 if it does not contain the
//! variable. An omitted coefficient is 1 and a lone `-` is -1.

use std::str::FromStr;

use tracing::debug;

use crate::error::ParseError;
use crate::poly::polynomial::Polynomial;

/// The variable symbol used by [`Polynomial::parse`].
pub const DEFAULT_VARIABLE: char = 'x';

/// Parse a polynomial in the single variable `variable`. Whitespace is ignored.
///
/// The terms are kept in the order in which they appear; call
/// [`Polynomial::simplify`] to obtain the canonical form.
pub fn parse_univariate(input: &str, variable: char) -> Result<Polynomial, ParseError> {
    if let Some((position, character)) = input
        .chars()
        .enumerate()
        .find(|(_, c)| c.is_alphabetic() && *c != variable)
    {
        debug!("Rejected '{}' at position {} in '{}'", character, position, input);
        return Err(ParseError::InvalidCharacter {
            character,
            position,
        });
    }

    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let mut poly = Polynomial::new(1);
    for (index, chunk) in stripped.split('+').enumerate() {
        let (coefficient, exponent) = parse_term(chunk, index, variable).map_err(|e| {
            debug!("Could not parse term {} of '{}': {}", index, input, e);
            e
        })?;

        poly.coefficients.push(coefficient);
        poly.exponents.push(exponent);
    }

    Ok(poly)
}

/// Split a term into its coefficient and exponent.
fn parse_term(chunk: &str, index: usize, variable: char) -> Result<(f64, u32), ParseError> {
    if chunk.is_empty() {
        return Err(ParseError::EmptyTerm { index });
    }

    let (base, exponent) = match chunk.split_once('^') {
        Some((b, e)) => (b, Some(e)),
        None => (chunk, None),
    };

    match base.split_once(variable) {
        Some((literal, rest)) => {
            if !rest.is_empty() {
                return Err(ParseError::MalformedCoefficient(base.to_owned()));
            }

            let coefficient = match literal {
                "" => 1.,
                "-" => -1.,
                _ => parse_coefficient(literal)?,
            };

            let exponent = match exponent {
                Some(e) => e
                    .parse::<u32>()
                    .map_err(|_| ParseError::MalformedExponent(e.to_owned()))?,
                None => 1,
            };

            Ok((coefficient, exponent))
        }
        None => {
            if exponent.is_some() {
                return Err(ParseError::MalformedExponent(chunk.to_owned()));
            }

            Ok((parse_coefficient(base)?, 0))
        }
    }
}

fn parse_coefficient(literal: &str) -> Result<f64, ParseError> {
    literal
        .parse::<f64>()
        .map_err(|_| ParseError::MalformedCoefficient(literal.to_owned()))
}

impl Polynomial {
    /// Parse a polynomial in `x`, see [`parse_univariate`].
    pub fn parse(input: &str) -> Result<Polynomial, ParseError> {
        parse_univariate(input, DEFAULT_VARIABLE)
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polynomial::parse(s)
    }
}
