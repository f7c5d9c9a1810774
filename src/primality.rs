//! Strong probable prime test over any modular arithmetic backend

use crate::traits::ModArith;

/// Test if the modulus `n` of `m` is a strong probable prime to `base` (one round of the
/// Miller-Rabin test).
///
/// With `n - 1 = d * 2^s` and `d` odd, `n` passes if `base^d = 1 (mod n)`, or if
/// `base^(d*2^r) = -1 (mod n)` for some `0 <= r < s`. Reaching 1 by squaring before -1
/// shows that `n` is composite.
pub fn is_sprp<M: ModArith>(m: &M, base: u64) -> bool {
    let n = m.modulus();
    if n < 2 {
        return false;
    }

    // find 2^shift*u + 1 = n
    let tm1 = n - 1;
    let shift = tm1.trailing_zeros();
    let u = tm1 >> shift;

    let mut x = m.powm(base, u);
    if x == 1 || x == tm1 {
        return true;
    }

    for _ in 1..shift {
        x = m.sqm(x);
        if x == tm1 {
            return true;
        }
        if x == 1 {
            return false;
        }
    }
    false
}
