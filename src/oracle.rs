//! Primality and factorization queries answered from a prime store

use crate::buffer::SieveStore;
use crate::error::{Error, Result};
use crate::factor::trial_division;
use crate::nt_funcs::{divisors, miller_rabin};
use crate::traits::{FactorizationConfig, PrimeBuffer};
use std::collections::BTreeMap;
use tracing::trace;

/// Answers primality and factorization queries for signed 64-bit integers.
///
/// Numbers up to the bound of the store are looked up directly, larger ones go through
/// the deterministic Miller-Rabin test. The oracle only borrows the store and keeps no
/// state of its own.
pub struct Oracle<'a, B: PrimeBuffer = SieveStore> {
    store: &'a B,
}

impl<'a, B: PrimeBuffer> Clone for Oracle<'a, B> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, B: PrimeBuffer> Copy for Oracle<'a, B> {}

impl<'a, B: PrimeBuffer> Oracle<'a, B> {
    #[inline]
    pub fn new(store: &'a B) -> Self {
        Oracle { store }
    }

    /// The store backing this oracle
    #[inline]
    pub fn store(&self) -> &'a B {
        self.store
    }

    /// Return whether `n` is a prime. Negative numbers are rejected with
    /// [Error::InvalidArgument], and numbers out of reach of the deterministic test are
    /// rejected with [Error::NotSupported].
    pub fn is_prime(&self, n: i64) -> Result<bool> {
        let n = u64::try_from(n)
            .map_err(|_| Error::InvalidArgument(format!("primality of negative number {}", n)))?;
        self.test(n)
    }

    fn test(&self, n: u64) -> Result<bool> {
        if n <= self.store.bound() {
            return Ok(self.store.is_prime_below_bound(n));
        }
        trace!(n, bound = self.store.bound(), "beyond sieve bound, using Miller-Rabin");
        miller_rabin(n)
    }

    /// Return the prime factorization of `n` as a map from prime factors to multiplicities,
    /// using the default [FactorizationConfig]. The map is empty for `n = 1`.
    ///
    /// A cofactor the deterministic test cannot decide (an odd number at or above
    /// [crate::detail::MAX_DETERMINISTIC]) is finished by trial division up to its square root.
    /// For a prime cofactor near `i64::MAX` that is about 1.5 * 10^9 candidates, which takes
    /// seconds rather than microseconds.
    pub fn prime_factors(&self, n: i64) -> Result<BTreeMap<u64, usize>> {
        self.factors(n, None)
    }

    /// Return the prime factorization of `n` with the given configuration
    pub fn factors(
        &self,
        n: i64,
        config: Option<FactorizationConfig>,
    ) -> Result<BTreeMap<u64, usize>> {
        let target = match u64::try_from(n) {
            Ok(t) if t >= 1 => t,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "factorization of non-positive number {}",
                    n
                )))
            }
        };

        let config = config.unwrap_or(FactorizationConfig::default());
        trial_division(self.store.seed_primes(), target, |r| {
            if config.cofactor_test {
                self.test(r)
            } else {
                Ok(false)
            }
        })
    }

    /// Return the prime factors of `n` in ascending order, each repeated by its multiplicity
    pub fn prime_factors_list(&self, n: i64) -> Result<Vec<u64>> {
        Ok(self
            .prime_factors(n)?
            .into_iter()
            .flat_map(|(p, e)| std::iter::repeat(p).take(e))
            .collect())
    }

    /// Return all divisors of `n` (including 1 and `n`), in the order they are generated from
    /// the prime factorization. See [crate::nt_funcs::divisors()].
    pub fn all_divisors(&self, n: i64) -> Result<Vec<u64>> {
        Ok(divisors(&self.prime_factors(n)?))
    }
}
