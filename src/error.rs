//! Error type shared by the sieve, the oracle and the factorization routines

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sieve bound below 2, or a negative (or zero, where positive is required) query
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The number is beyond the largest threshold of the deterministic witness table
    #[error("No proven deterministic witness set available for {0}")]
    NotSupported(u64),

    /// The native-width modular arithmetic was asked to take a modulus it cannot hold
    #[error("Modulus {0} exceeds native width")]
    ArithmeticOverflow(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
