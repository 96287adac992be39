pub mod arithmetic;
pub mod cache;
pub mod calculus;
pub mod canonical;
pub mod expected_utility;
pub mod polynomial;
pub mod term;

use std::cmp::Ordering;

/// The number of exponents a [`term::Term`] stores inline before spilling to the heap.
pub const INLINED_EXPONENTS: usize = 6;

/// A monomial order on exponent tuples of equal length.
pub trait MonomialOrder {
    fn cmp(a: &[u32], b: &[u32]) -> Ordering;
}

/// Lexicographic ordering of monomials: the first position
/// where the tuples differ decides.
pub struct LexOrder {}

impl MonomialOrder for LexOrder {
    #[inline]
    fn cmp(a: &[u32], b: &[u32]) -> Ordering {
        debug_assert_eq!(a.len(), b.len());
        a.cmp(b)
    }
}

/// Degree of a monomial, i.e. the sum of its exponents.
#[inline]
pub fn monomial_degree(exponents: &[u32]) -> u32 {
    exponents.iter().sum()
}
