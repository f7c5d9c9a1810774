/// This trait describes a store of primes that resolves primality directly up to a fixed bound
pub trait PrimeBuffer {
    /// Inclusive upper limit of numbers whose primality is resolved by the store itself
    fn bound(&self) -> u64;

    /// Look up whether `n` is a prime. Panics if `n` exceeds [PrimeBuffer::bound()]
    fn is_prime_below_bound(&self, n: u64) -> bool;

    /// The primes found while building the store, sorted. These are at least all primes
    /// not larger than `sqrt(bound) + 1`
    fn seed_primes(&self) -> &[u64];

    /// Return all primes not larger than [PrimeBuffer::bound()], sorted. The list is computed
    /// on the first call and reused afterwards
    fn complete_enumeration(&self) -> &[u64];

    /// The largest prime currently known to the store
    fn max_known_prime(&self) -> u64;
}

/// This trait describes modular arithmetic with a fixed modulus on u64 residues
pub trait ModArith {
    /// Return the modulus
    fn modulus(&self) -> u64;

    /// Return (lhs * rhs) % m
    fn mulm(&self, lhs: u64, rhs: u64) -> u64;

    /// Return (base ^ exp) % m
    fn powm(&self, base: u64, exp: u64) -> u64;

    /// Return (x * x) % m
    #[inline]
    fn sqm(&self, x: u64) -> u64 {
        self.mulm(x, x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorizationConfig {
    /// Test whether the remaining cofactor is a prime every time it shrinks. This stops the
    /// trial division as soon as only one (possibly large) prime is left.
    pub cofactor_test: bool,
}

impl FactorizationConfig {
    pub fn default() -> Self {
        Self {
            cofactor_test: true,
        }
    }

    /// Configuration doing trial division only
    pub fn trial_only() -> Self {
        Self {
            cofactor_test: false,
        }
    }
}
