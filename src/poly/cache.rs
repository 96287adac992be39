use ahash::HashMap;
use tracing::{debug, instrument, trace};

use crate::error::PolynomialError;

use super::polynomial::Polynomial;

/// Memoized successive derivatives of a polynomial, one chain per variable.
///
/// Each chain remembers the version of the polynomial it was computed from.
/// A chain whose version no longer matches is stale and is rebuilt from
/// scratch on the next query.
#[derive(Clone, Default, Debug)]
pub struct DerivativeCache {
    chains: HashMap<usize, DerivativeChain>,
    computed: usize,
}

#[derive(Clone, Debug)]
struct DerivativeChain {
    base_version: u64,
    // derivatives[k] holds the derivative of order k + 1
    derivatives: Vec<Polynomial>,
}

impl DerivativeChain {
    fn new(base_version: u64) -> DerivativeChain {
        DerivativeChain {
            base_version,
            derivatives: vec![],
        }
    }
}

impl DerivativeCache {
    /// The number of derivatives computed to fill the cache so far.
    #[inline]
    pub fn computed(&self) -> usize {
        self.computed
    }

    /// The length of the chain for `var`, counting the polynomial itself as entry 0.
    /// Returns 0 if nothing is cached for `var`.
    pub fn chain_len(&self, var: usize) -> usize {
        self.chains
            .get(&var)
            .map(|c| c.derivatives.len() + 1)
            .unwrap_or(0)
    }

    /// Returns `true` if a chain for `var` exists that was built from a
    /// different version of the polynomial than `version`.
    pub fn is_stale(&self, var: usize, version: u64) -> bool {
        self.chains
            .get(&var)
            .map(|c| c.base_version != version)
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.chains.clear();
    }
}

impl Polynomial {
    /// Get the `order`-th derivative with respect to `var`, see [`Polynomial::derivative`].
    ///
    /// The derivatives are memoized: requesting order `n` grows the chain for
    /// `var` to `n + 1` entries, where each missing entry is derived from the
    /// previous one. Any mutation of `self` makes the chain stale.
    #[instrument(level = "trace", skip(self), fields(version = self.version))]
    pub fn get_derivative(
        &mut self,
        order: usize,
        var: usize,
    ) -> Result<&Polynomial, PolynomialError> {
        self.check_var(var)?;

        if order == 0 {
            return Ok(self);
        }

        let mut chain = match self.cache.chains.remove(&var) {
            Some(c) if c.base_version == self.version => c,
            Some(c) => {
                debug!(
                    "Stale derivative chain for variable {}: built from version {}, now {}",
                    var, c.base_version, self.version
                );
                DerivativeChain::new(self.version)
            }
            None => DerivativeChain::new(self.version),
        };

        if chain.derivatives.len() >= order {
            trace!("Derivative cache hit");
        }

        while chain.derivatives.len() < order {
            let next = match chain.derivatives.last() {
                Some(prev) => prev.derivative(var)?,
                None => self.derivative(var)?,
            };
            chain.derivatives.push(next);
            self.cache.computed += 1;
        }

        let chain = self.cache.chains.entry(var).or_insert(chain);
        Ok(&chain.derivatives[order - 1])
    }

    /// Read access to the derivative cache.
    #[inline]
    pub fn derivative_cache(&self) -> &DerivativeCache {
        &self.cache
    }

    /// Drop all cached derivatives.
    pub fn invalidate_derivatives(&mut self) {
        self.cache.clear();
    }
}
