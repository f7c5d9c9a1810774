//! Factorization by trial division

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::trace;

/// Factorize `target` by trial division, returning the prime factors with their multiplicities.
///
/// The candidates are `primes` (sorted, starting from 2) followed by the odd numbers beyond the
/// last of them, so the target is always fully factored. An empty `primes` is treated as `[2]`,
/// and a list not starting from 2 is rejected with [Error::InvalidArgument]. Whenever the
/// cofactor shrinks, it is handed to `cofactor_test` first; a positive answer finishes the
/// factorization immediately. A cofactor the test refuses with [Error::NotSupported] is left to
/// the trial division.
pub fn trial_division<F>(
    primes: &[u64],
    target: u64,
    mut cofactor_test: F,
) -> Result<BTreeMap<u64, usize>>
where
    F: FnMut(u64) -> Result<bool>,
{
    let primes = match primes.first() {
        None => &[2][..],
        Some(2) => primes,
        Some(p) => {
            return Err(Error::InvalidArgument(format!(
                "trial division primes should start from 2, got {}",
                p
            )))
        }
    };
    let next = primes.last().map_or(3, |&p| (p + 1) | 1);
    let candidates = primes.iter().copied().chain((next..).step_by(2));

    let mut residual = target;
    let mut result = BTreeMap::new();
    let mut shrunk = true;
    for p in candidates {
        if residual <= 1 {
            break;
        }

        if shrunk {
            match cofactor_test(residual) {
                Ok(true) => {
                    *result.entry(residual).or_insert(0) += 1;
                    return Ok(result);
                }
                Ok(false) => {}
                Err(Error::NotSupported(_)) => {
                    trace!(residual, "cofactor primality undecided, continue trial division");
                }
                Err(e) => return Err(e),
            }
            shrunk = false;
        }

        // no factor below the square root, the residual is a prime
        if p.checked_mul(p).map_or(true, |sq| sq > residual) {
            *result.entry(residual).or_insert(0) += 1;
            return Ok(result);
        }

        while residual % p == 0 {
            residual /= p;
            *result.entry(p).or_insert(0) += 1;
            shrunk = true;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: [u64; 5] = [2, 3, 5, 7, 11];

    #[test]
    fn trial_division_test() {
        let fac123456789 = BTreeMap::from_iter([(3, 2), (3803, 1), (3607, 1)]);
        let fac = trial_division(&SEED, 123456789, |_| Ok(false)).unwrap();
        assert_eq!(fac, fac123456789);

        let fac1008 = BTreeMap::from_iter([(2, 4), (3, 2), (7, 1)]);
        assert_eq!(trial_division(&SEED, 1008, |_| Ok(false)).unwrap(), fac1008);

        assert!(trial_division(&SEED, 1, |_| Ok(false)).unwrap().is_empty());
        assert_eq!(
            trial_division(&[2], 97, |_| Ok(false)).unwrap(),
            BTreeMap::from_iter([(97, 1)])
        );
        assert_eq!(
            trial_division(&[2], 2 * 2 * 9 * 25, |_| Ok(false)).unwrap(),
            BTreeMap::from_iter([(2, 2), (3, 2), (5, 2)])
        );

        // without any primes the candidates still start from 2
        assert_eq!(
            trial_division(&[], 4, |_| Ok(false)).unwrap(),
            BTreeMap::from_iter([(2, 2)])
        );
        assert_eq!(
            trial_division(&[], 2 * 3 * 3 * 101, |_| Ok(false)).unwrap(),
            BTreeMap::from_iter([(2, 1), (3, 2), (101, 1)])
        );
        assert!(matches!(
            trial_division(&[3, 5, 7], 4, |_| Ok(false)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn cofactor_test_test() {
        // a positive cofactor test ends the division early
        let mut tested = Vec::new();
        let fac = trial_division(&SEED, 2 * 1_000_003, |n| {
            tested.push(n);
            Ok(n == 1_000_003)
        })
        .unwrap();
        assert_eq!(fac, BTreeMap::from_iter([(2, 1), (1_000_003, 1)]));
        assert_eq!(tested, vec![2 * 1_000_003, 1_000_003]);

        // undecided cofactors fall back to trial division
        let fac =
            trial_division(&SEED, 999_983 * 999_979, |n| Err(Error::NotSupported(n))).unwrap();
        assert_eq!(fac, BTreeMap::from_iter([(999_979, 1), (999_983, 1)]));

        // other errors are propagated
        let res = trial_division(&SEED, 15, |_| Err(Error::InvalidArgument("test".to_string())));
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }
}
