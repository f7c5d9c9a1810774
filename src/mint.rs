//! Modular arithmetic backends for u64 residues.
//!
//! A modulus that fits in 32 bits is served by [NativeModulus], which reduces both operands
//! first so that every product fits in a u64 accumulator. Any larger modulus goes through
//! [BigModulus], which computes with arbitrary precision integers. [select()] picks the
//! backend from the width of the modulus, and both backends return identical residues.

use crate::error::{Error, Result};
use crate::traits::ModArith;
use either::{for_both, Either, Left, Right};
use num_bigint::BigUint;

/// Modulus below 2^32, arithmetic is done with u64 accumulators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeModulus(u64);

impl TryFrom<u64> for NativeModulus {
    type Error = Error;

    fn try_from(m: u64) -> Result<Self> {
        if m == 0 {
            return Err(Error::InvalidArgument("modulus should be positive".to_string()));
        }
        if u32::try_from(m).is_err() {
            return Err(Error::ArithmeticOverflow(m));
        }
        Ok(Self(m))
    }
}

impl ModArith for NativeModulus {
    #[inline]
    fn modulus(&self) -> u64 {
        self.0
    }

    #[inline]
    fn mulm(&self, lhs: u64, rhs: u64) -> u64 {
        // both factors are below 2^32 after the reduction
        (lhs % self.0) * (rhs % self.0) % self.0
    }

    fn powm(&self, base: u64, exp: u64) -> u64 {
        let m = self.0;
        let mut base = base % m;
        let mut exp = exp;
        let mut result = 1 % m;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base % m;
            }
            base = base * base % m;
            exp >>= 1;
        }
        result
    }
}

/// Modulus of arbitrary width, arithmetic is done with [BigUint]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigModulus {
    value: u64,
    big: BigUint,
}

impl TryFrom<u64> for BigModulus {
    type Error = Error;

    fn try_from(m: u64) -> Result<Self> {
        if m == 0 {
            return Err(Error::InvalidArgument("modulus should be positive".to_string()));
        }
        Ok(Self {
            value: m,
            big: BigUint::from(m),
        })
    }
}

impl BigModulus {
    /// Residues are smaller than the modulus, so they always fit in a single u64 digit
    #[inline]
    fn residue(v: &BigUint) -> u64 {
        v.iter_u64_digits().next().unwrap_or(0)
    }
}

impl ModArith for BigModulus {
    #[inline]
    fn modulus(&self) -> u64 {
        self.value
    }

    fn mulm(&self, lhs: u64, rhs: u64) -> u64 {
        Self::residue(&(BigUint::from(lhs) * BigUint::from(rhs) % &self.big))
    }

    fn powm(&self, base: u64, exp: u64) -> u64 {
        if self.value == 1 {
            return 0;
        }
        Self::residue(&BigUint::from(base).modpow(&BigUint::from(exp), &self.big))
    }
}

/// A modulus with the backend chosen by [select()]
pub type Modulus = Either<NativeModulus, BigModulus>;

impl<L: ModArith, R: ModArith> ModArith for Either<L, R> {
    #[inline]
    fn modulus(&self) -> u64 {
        for_both!(self, m => m.modulus())
    }

    #[inline]
    fn mulm(&self, lhs: u64, rhs: u64) -> u64 {
        for_both!(self, m => m.mulm(lhs, rhs))
    }

    #[inline]
    fn powm(&self, base: u64, exp: u64) -> u64 {
        for_both!(self, m => m.powm(base, exp))
    }
}

/// Choose the native backend when the modulus fits in 32 bits, otherwise the arbitrary
/// precision one. The modulus must be positive.
pub fn select(m: u64) -> Result<Modulus> {
    match NativeModulus::try_from(m) {
        Ok(native) => Ok(Left(native)),
        Err(Error::ArithmeticOverflow(_)) => BigModulus::try_from(m).map(Right),
        Err(e) => Err(e),
    }
}
