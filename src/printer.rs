use std::fmt::{self, Display, Write};
use std::io;

use smartstring::{LazyCompact, SmartString};

use crate::poly::polynomial::Polynomial;

/// How the variables of a polynomial are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintMode {
    /// `x` with a subscript per variable index.
    Generic,
    /// The probability `p_{player,strategy}` of a player choosing a strategy.
    ExpectedUtility {
        player: SmartString<LazyCompact>,
        strategy: SmartString<LazyCompact>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub mode: PrintMode,
    /// The variable symbol in generic mode.
    pub variable: char,
    /// Print the canonical form instead of the terms as stored.
    pub simplify: bool,
    /// Write `x_1` instead of `x` for polynomials in a single variable.
    pub subscript_single_variable: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            mode: PrintMode::Generic,
            variable: 'x',
            simplify: true,
            subscript_single_variable: false,
        }
    }
}

impl PrintOptions {
    /// Options for printing expected utilities of `player` for `strategy`.
    pub fn expected_utility(player: impl Display, strategy: impl Display) -> PrintOptions {
        PrintOptions {
            mode: PrintMode::ExpectedUtility {
                player: player.to_string().into(),
                strategy: strategy.to_string().into(),
            },
            ..Default::default()
        }
    }
}

pub struct PolynomialPrinter<'a> {
    pub poly: &'a Polynomial,
    pub opts: PrintOptions,
}

impl<'a> PolynomialPrinter<'a> {
    pub fn new(poly: &'a Polynomial) -> PolynomialPrinter<'a> {
        PolynomialPrinter {
            poly,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(poly: &'a Polynomial, opts: PrintOptions) -> PolynomialPrinter<'a> {
        PolynomialPrinter { poly, opts }
    }

    /// Write the polynomial followed by a newline to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    fn fmt_variable(&self, f: &mut fmt::Formatter, var: usize) -> fmt::Result {
        match &self.opts.mode {
            PrintMode::Generic => {
                f.write_char(self.opts.variable)?;
                if self.poly.nvars() > 1 || self.opts.subscript_single_variable {
                    write!(f, "_{}", var + 1)?;
                }
                Ok(())
            }
            PrintMode::ExpectedUtility { player, strategy } => {
                write!(f, "p_{{{},{}}}", player, strategy)
            }
        }
    }
}

impl<'a> Display for PolynomialPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let simplified;
        let poly = if self.opts.simplify {
            simplified = self.poly.simplified();
            &simplified
        } else {
            self.poly
        };

        if poly.is_empty() {
            return Ok(());
        }

        if poly.is_zero() {
            return f.write_char('0');
        }

        let coefficients = &poly.coefficients;
        let mut first = true;
        for (t, term) in poly.into_iter().enumerate() {
            let c = *term.coefficient;
            if c == 0. {
                continue;
            }

            let non_constant = !term.is_constant();
            if first {
                if !non_constant || c.abs() != 1. {
                    write!(f, "{}", c)?;
                } else if c < 0. {
                    f.write_char('-')?;
                }
            } else if !non_constant || c.abs() != 1. {
                write!(f, "{}", c.abs())?;
            }
            first = false;

            for (var, e) in term.exponents.iter().enumerate() {
                if *e != 0 {
                    self.fmt_variable(f, var)?;
                    if *e != 1 {
                        write!(f, "^{}", e)?;
                    }
                }
            }

            // the sign of the next nonzero term decides the operator
            if let Some(next) = coefficients[t + 1..].iter().find(|c| **c != 0.) {
                if *next < 0. {
                    f.write_str(" - ")?;
                } else {
                    f.write_str(" + ")?;
                }
            }
        }

        Ok(())
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        PolynomialPrinter::new(self).fmt(f)
    }
}

impl Polynomial {
    pub fn printer(&self, opts: PrintOptions) -> PolynomialPrinter<'_> {
        PolynomialPrinter::new_with_options(self, opts)
    }

    /// Render the polynomial as the expected utility of `player` for `strategy`.
    pub fn format_expected_utility(&self, player: impl Display, strategy: impl Display) -> String {
        self.printer(PrintOptions::expected_utility(player, strategy)).to_string()
    }
}
