use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Primes available for trial division and as Miller-Rabin bases.
const SMALL_PRIME_COUNT: usize = 2048;
/// Sieve bound holding at least `SMALL_PRIME_COUNT` primes.
const SIEVE_LIMIT: usize = 17_900;

static SMALL_PRIMES: OnceLock<Vec<u32>> = OnceLock::new();

/// First `SMALL_PRIME_COUNT` primes, sieved once per process.
fn small_primes() -> &'static [u32] {
    SMALL_PRIMES.get_or_init(|| {
        let mut composite = vec![false; SIEVE_LIMIT + 1];
        let mut primes = Vec::with_capacity(SMALL_PRIME_COUNT);
        for n in 2..=SIEVE_LIMIT {
            if composite[n] {
                continue;
            }
            primes.push(n as u32);
            if primes.len() == SMALL_PRIME_COUNT {
                break;
            }
            let mut multiple = n * n;
            while multiple <= SIEVE_LIMIT {
                composite[multiple] = true;
                multiple += n;
            }
        }
        primes
    })
}

/// Probabilistic primality test with a deterministic witness set.
///
/// Runs `witnesses` Miller-Rabin rounds using the first `witnesses` primes
/// as bases, optionally preceded by trial division against the small-prime
/// table. Fixed bases keep verification identical across nodes; the
/// false-positive probability stays at most `4^-witnesses`.
pub fn is_probable_prime(n: &BigUint, witnesses: u32, trial_division: bool) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }
    if *n == two {
        return true;
    }
    if (n % 2u32).is_zero() {
        return false;
    }

    if trial_division {
        for &p in small_primes() {
            let p = BigUint::from(p);
            if *n == p {
                return true;
            }
            if (n % &p).is_zero() {
                return false;
            }
        }
    }

    // n is odd and >= 5 here; write n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().expect("n - 1 is even and non-zero");
    let d = &n_minus_one >> s;

    'witness: for &base in small_primes().iter().take(witnesses as usize) {
        let a = BigUint::from(base) % n;
        if a.is_zero() {
            continue;
        }
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
