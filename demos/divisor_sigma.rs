use sieve_oracle::{Oracle, SieveStore};

/// Calculate the divisor sigma function `σ_z(n`) on the target
/// Reference: <https://en.wikipedia.org/wiki/Divisor_function>
fn divisor_sigma(oracle: &Oracle, target: i64, z: u32) -> sieve_oracle::Result<u64> {
    Ok(oracle.all_divisors(target)?.into_iter().map(|d| d.pow(z)).sum())
}

fn main() -> sieve_oracle::Result<()> {
    let store = SieveStore::new(100)?;
    let oracle = Oracle::new(&store);

    println!("Divisor sigma with z=1 of numbers from 10 to 99:");
    for i in 10..100 {
        println!("{}: {:?}", i, divisor_sigma(&oracle, i, 1)?);
    }
    Ok(())
}
