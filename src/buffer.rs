//! SieveStore implements a bounded sieve of Eratosthenes with a lazily completed prime list

use crate::error::{Error, Result};
use crate::traits::PrimeBuffer;
use bitvec::vec::BitVec;
use num_integer::{Integer, Roots};
use std::sync::OnceLock;
use tracing::debug;

/// A sieve over odd numbers up to a fixed bound.
///
/// Construction only collects the primes needed to finish the sieve (those not larger than
/// `sqrt(bound) + 1`). The list of every prime under the bound is materialized on demand by
/// [PrimeBuffer::complete_enumeration()], at most once per store, and concurrent callers of
/// the completion all observe the same list.
pub struct SieveStore {
    bound: u64,
    composite: BitVec, // bit i is set iff 2i+1 is not a prime
    seed: Vec<u64>,    // primes found during construction, starting from 2
    complete: OnceLock<Vec<u64>>,
}

impl SieveStore {
    pub fn new(bound: u64) -> Result<Self> {
        if bound < 2 {
            return Err(Error::InvalidArgument(format!(
                "sieve bound should be at least 2, got {}",
                bound
            )));
        }
        let too_large =
            || Error::InvalidArgument(format!("sieve bound {} does not fit in memory", bound));

        // one bit for each odd number up to the bound
        let size = usize::try_from(bound / 2 + (bound & 1)).map_err(|_| too_large())?;
        let words = size / usize::BITS as usize + usize::from(size % usize::BITS as usize != 0);
        let mut raw: Vec<usize> = Vec::new();
        raw.try_reserve_exact(words).map_err(|_| too_large())?;
        raw.resize(words, 0);

        let mut composite: BitVec = BitVec::from_vec(raw);
        composite.truncate(size);
        composite.set(0, true); // 1 is not a prime

        // every composite under the bound has a prime factor not larger than its square root,
        // and striking out can start from p*p since smaller multiples are already marked
        let root = Roots::sqrt(&bound);
        let mut seed = vec![2];
        for p in (3..=root + 1).step_by(2) {
            if composite[(p / 2) as usize] {
                continue;
            }
            seed.push(p);
            for multi in (p * p..=bound).step_by((2 * p) as usize) {
                composite.set((multi / 2) as usize, true);
            }
        }

        debug!(bound, seeds = seed.len(), "sieve constructed");
        Ok(SieveStore {
            bound,
            composite,
            seed,
            complete: OnceLock::new(),
        })
    }

    /// Whether [PrimeBuffer::complete_enumeration()] has been carried out
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete.get().is_some()
    }
}

impl PrimeBuffer for SieveStore {
    #[inline]
    fn bound(&self) -> u64 {
        self.bound
    }

    fn is_prime_below_bound(&self, n: u64) -> bool {
        assert!(
            n <= self.bound,
            "{} is beyond the sieve bound {}",
            n,
            self.bound
        );

        if n.is_even() {
            return n == 2;
        }
        !self.composite[(n / 2) as usize]
    }

    #[inline]
    fn seed_primes(&self) -> &[u64] {
        &self.seed
    }

    fn complete_enumeration(&self) -> &[u64] {
        self.complete.get_or_init(|| {
            let last = *self.seed.last().unwrap_or(&2);
            let start = (((last + 1) | 1) / 2) as usize; // index of the next odd number
            let start = start.min(self.composite.len());

            let mut primes = self.seed.clone();
            primes.extend(
                self.composite[start..]
                    .iter_zeros()
                    .map(|i| ((i + start) as u64) * 2 + 1),
            );
            debug!(
                bound = self.bound,
                count = primes.len(),
                "enumerated all primes under the bound"
            );
            primes
        })
    }

    fn max_known_prime(&self) -> u64 {
        self.complete
            .get()
            .and_then(|list| list.last())
            .or_else(|| self.seed.last())
            .copied()
            .unwrap_or(2)
    }
}
