//! Standalone number theoretic functions that can be used without a sieve

use crate::error::{Error, Result};
use crate::mint;
use crate::primality::is_sprp;
use crate::tables::MILLER_RABIN_WITNESSES;
use num_integer::Integer;
use std::collections::BTreeMap;
use tracing::warn;

/// Return the smallest witness set proven to decide the primality of every odd number below
/// the threshold that `n` falls under, or None if `n` is beyond the whole table.
pub fn witnesses(n: u64) -> Option<&'static [u64]> {
    MILLER_RABIN_WITNESSES
        .iter()
        .find(|(threshold, _)| n < *threshold)
        .map(|(_, w)| *w)
}

/// This function does a deterministic Miller-Rabin test on a signed 64-bit integer.
///
/// Even numbers, multiples of 3 and numbers below 2 are decided directly at any magnitude.
/// Other numbers not smaller than [crate::detail::MAX_DETERMINISTIC] have no proven witness
/// set and are refused with [Error::NotSupported]; negative numbers are refused with
/// [Error::InvalidArgument].
pub fn is_prime64(target: i64) -> Result<bool> {
    let n = u64::try_from(target).map_err(|_| {
        Error::InvalidArgument(format!("primality of negative number {}", target))
    })?;
    miller_rabin(n)
}

pub(crate) fn miller_rabin(n: u64) -> Result<bool> {
    // shortcuts
    if n < 2 {
        return Ok(false);
    }
    if n.is_even() {
        return Ok(n == 2);
    }
    if n % 3 == 0 {
        return Ok(n == 3);
    }

    let witnesses = match witnesses(n) {
        Some(w) => w,
        None => {
            warn!(n, "no deterministic witness set, refusing primality test");
            return Err(Error::NotSupported(n));
        }
    };

    let m = mint::select(n)?;
    Ok(witnesses
        .iter()
        .filter(|&&a| a % n != 0)
        .all(|&a| is_sprp(&m, a)))
}

/// Return all divisors of the number with the given factorization, starting from 1.
///
/// The list is extended prime by prime: the divisors collected so far are multiplied by
/// `p, p^2, .., p^e` and appended, so the result follows that construction order rather
/// than magnitude.
pub fn divisors(factors: &BTreeMap<u64, usize>) -> Vec<u64> {
    let mut result = Vec::with_capacity(factors.values().map(|e| e + 1).product());
    result.push(1);

    for (&p, &e) in factors {
        let previous = result.len();
        let mut pk = 1;
        for _ in 0..e {
            pk *= p;
            for i in 0..previous {
                let d = result[i] * pk;
                result.push(d);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{MAX_DETERMINISTIC, SMALL_PRIMES};
    use rand::random;

    /// Naive reference for primality
    fn is_prime_naive(n: u64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn witness_selection_test() {
        assert_eq!(witnesses(5), Some(&[2u64][..]));
        assert_eq!(witnesses(2046), Some(&[2u64][..]));
        assert_eq!(witnesses(2047), Some(&[2u64, 3][..]));
        assert_eq!(witnesses(9_080_190), Some(&[31u64, 73][..]));
        assert_eq!(witnesses(4_759_123_141), Some(&[2u64, 13, 23, 1_662_803][..]));
        assert_eq!(witnesses(MAX_DETERMINISTIC - 1).map(|w| w.len()), Some(7));
        assert_eq!(witnesses(MAX_DETERMINISTIC), None);
    }

    #[test]
    fn is_prime64_test() {
        // test small primes
        for x in 0..100 {
            assert_eq!(SMALL_PRIMES.contains(&x), is_prime64(x as i64).unwrap());
        }
        for x in 100..20000 {
            assert_eq!(is_prime_naive(x), is_prime64(x as i64).unwrap(), "on {}", x);
        }

        // some large primes
        assert_eq!(is_prime64(6469693333), Ok(true));
        assert_eq!(is_prime64(999973156643), Ok(true));
        assert_eq!(is_prime64(4294967291), Ok(true));
        assert_eq!(is_prime64(341550071728289), Ok(true));

        // composites built from two primes
        assert_eq!(is_prime64(4294967291 * 65521), Ok(false));
        assert_eq!(is_prime64(1122004669633), Ok(false));
    }

    #[test]
    fn threshold_test() {
        // every threshold of the table is a composite, and so is the number right below it
        for (threshold, _) in MILLER_RABIN_WITNESSES.iter().take(9) {
            let t = *threshold as i64;
            assert_eq!(is_prime64(t), Ok(false), "threshold {}", t);
            assert_eq!(is_prime64(t - 1), Ok(false), "below threshold {}", t);
        }
        assert_eq!(is_prime64(3215031749), Ok(true));
        assert_eq!(is_prime64(4759123129), Ok(true));

        let max = MAX_DETERMINISTIC as i64;
        assert_eq!(is_prime64(max - 1), Ok(false));
        assert_eq!(is_prime64(max), Err(Error::NotSupported(MAX_DETERMINISTIC)));
        assert_eq!(is_prime64(max + 4), Err(Error::NotSupported(MAX_DETERMINISTIC + 4)));

        // shortcuts still apply beyond the table
        assert_eq!(is_prime64(max + 1), Ok(false));
        assert_eq!(is_prime64(i64::MAX - 1), Ok(false));
        assert_eq!(is_prime64(3 * 1_000_000_000_000_001), Ok(false));
    }

    #[test]
    fn invalid_input_test() {
        assert!(matches!(is_prime64(-1), Err(Error::InvalidArgument(_))));
        assert!(matches!(is_prime64(i64::MIN), Err(Error::InvalidArgument(_))));
        assert_eq!(is_prime64(0), Ok(false));
        assert_eq!(is_prime64(1), Ok(false));
    }

    #[test]
    fn random_composite_test() {
        for _ in 0..100 {
            let x = (random::<u32>() >> 8) as i64 + 2;
            let y = (random::<u32>() >> 8) as i64 + 2;
            assert_eq!(is_prime64(x * y), Ok(false), "{} * {}", x, y);
        }
    }

    #[test]
    fn divisors_test() {
        assert_eq!(divisors(&BTreeMap::new()), vec![1]);

        let fac12 = BTreeMap::from_iter([(2, 2), (3, 1)]);
        assert_eq!(divisors(&fac12), vec![1, 2, 4, 3, 6, 12]);

        // 72 = 2^3 * 3^2
        let fac72 = BTreeMap::from_iter([(2, 3), (3, 2)]);
        let mut d72 = divisors(&fac72);
        assert_eq!(d72.len(), 12);
        d72.sort_unstable();
        assert_eq!(d72, vec![1, 2, 3, 4, 6, 8, 9, 12, 18, 24, 36, 72]);
    }
}
