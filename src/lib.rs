//! Exact primality test and factorization for 64-bit integers.
//!
//! A [SieveStore] resolves numbers up to its bound by lookup, and an [Oracle] built on it
//! extends the answers to every 64-bit magnitude covered by a deterministic Miller-Rabin test.
//!
//! ```
//! use sieve_oracle::{Oracle, PrimeBuffer, SieveStore};
//!
//! let store = SieveStore::new(10000).unwrap();
//! let oracle = Oracle::new(&store);
//! assert_eq!(oracle.is_prime(999973156643), Ok(true));
//! assert_eq!(oracle.prime_factors_list(1008), Ok(vec![2, 2, 2, 2, 3, 3, 7]));
//! assert_eq!(store.complete_enumeration().len(), 1229);
//! ```

mod buffer;
mod error;
mod factor;
mod mint;
pub mod nt_funcs;
mod oracle;
mod primality;
mod tables;
mod traits;

pub use buffer::SieveStore;
pub use error::{Error, Result};
pub use oracle::Oracle;
pub use traits::{FactorizationConfig, ModArith, PrimeBuffer};

pub mod detail {
    pub use super::factor::trial_division;
    pub use super::mint::{select as select_modulus, BigModulus, Modulus, NativeModulus};
    pub use super::primality::is_sprp;
    pub use super::tables::{MAX_DETERMINISTIC, MILLER_RABIN_WITNESSES, SMALL_PRIMES};
}
