use sieve_oracle::{Oracle, SieveStore};

/// Calculate the (small) prime omega function ω(n) on the target
/// Reference: <https://en.wikipedia.org/wiki/Prime_omega_function>
fn prime_omega(oracle: &Oracle, target: i64) -> sieve_oracle::Result<usize> {
    Ok(oracle.prime_factors(target)?.len())
}

/// Calculate the (big) prime omega function Ω(n) on the target
/// Reference: <https://en.wikipedia.org/wiki/Prime_omega_function>
#[allow(non_snake_case)]
fn prime_Omega(oracle: &Oracle, target: i64) -> sieve_oracle::Result<usize> {
    Ok(oracle.prime_factors_list(target)?.len())
}

fn main() -> sieve_oracle::Result<()> {
    let store = SieveStore::new(100)?;
    let oracle = Oracle::new(&store);

    println!("Prime omega of numbers from 10 to 99:");
    for i in 10..100 {
        println!(
            "{}: ω={}, Ω={}",
            i,
            prime_omega(&oracle, i)?,
            prime_Omega(&oracle, i)?
        );
    }
    Ok(())
}
