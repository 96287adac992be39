use thiserror::Error;

/// Errors raised while parsing a polynomial from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid character '{character}' at position {position}: expected an expression of the form ax^n + bx^m + ... + z")]
    InvalidCharacter { character: char, position: usize },
    #[error("term {index} is empty")]
    EmptyTerm { index: usize },
    #[error("malformed coefficient '{0}'")]
    MalformedCoefficient(String),
    #[error("malformed exponent '{0}'")]
    MalformedExponent(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("term index {index} out of range for a polynomial with {nterms} terms")]
    TermIndexOutOfRange { index: usize, nterms: usize },
    #[error("variable {var} out of range for a polynomial in {nvars} variables")]
    VariableOutOfRange { var: usize, nvars: usize },
    #[error("nvars mismatched: got {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("expected {expected} entries, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("cannot integrate with respect to variable {var}: zero exponent after increment")]
    DegenerateIntegration { var: usize },
    #[error("exponent overflow in variable {var}")]
    ExponentOverflow { var: usize },
}
