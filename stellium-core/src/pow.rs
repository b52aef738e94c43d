use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::compact::{from_compact, CompactBits, SIGN_BIT};
use crate::error::pow::PowError;
use crate::hash::{Hash256, HASH_SIZE};
use crate::params::Params;
use crate::primality::is_probable_prime;

/// Number of primes in a valid constellation.
pub const CONSTELLATION_SIZE: u32 = 6;

/// Offsets of the constellation members from the base prime.
pub const CONSTELLATION_OFFSETS: [u8; CONSTELLATION_SIZE as usize] = [0, 4, 6, 10, 12, 16];

/// Zero bits between the base's leading 1 and its hash window.
pub const ZEROS_BEFORE_HASH_IN_PRIME: u32 = 8;

/// Smallest accepted prime size: 1 + 8 + 256 bits of structure plus 39
/// trailing zeros.
pub const MIN_PRIME_SIZE_BITS: u32 = 304;

/// Candidate offset witnessing a constellation. Up to 256 bits on the
/// wire; the verifier bounds it by the trailing-zero count.
pub type Offset = BigUint;

/// Structural bits of every base: leading 1, zero run, hash window.
const SIGNIFICANT_BITS: u32 = 1 + ZEROS_BEFORE_HASH_IN_PRIME + 256;

/// Witness schedule: (member offset, Miller-Rabin rounds, trial division).
/// Two passes over the constellation, ascending then descending, the
/// second with stronger witness counts. The first failing step is the one
/// reported, so order is observable and must not change.
const WITNESS_SCHEDULE: [(u8, u8, bool); 11] = [
    (0, 1, true),
    (4, 1, true),
    (6, 1, true),
    (10, 1, true),
    (12, 1, true),
    (16, 4, true),
    (12, 3, false),
    (10, 3, false),
    (6, 3, false),
    (4, 3, false),
    (0, 3, false),
];

/// Build the deterministic base integer for a header hash and difficulty.
///
/// The base is a leading 1 bit, `ZEROS_BEFORE_HASH_IN_PRIME` zero bits,
/// the 256 hash bits consumed least-significant first, then enough zero
/// bits to reach the decoded difficulty's width. Returns the base and the
/// trailing-zero count. A difficulty below the 265 structural bits leaves
/// the base unshifted and returns a zero count; decoded difficulties past
/// `2^32 - 1` saturate there.
pub fn generate_prime_base(hash: Hash256, compact_bits: CompactBits) -> (BigUint, u32) {
    let mut base = BigUint::one();
    base <<= ZEROS_BEFORE_HASH_IN_PRIME;

    for i in 0..HASH_SIZE * 8 {
        let bit = (hash[i / 8] >> (i % 8)) & 1;
        base = (base << 1u32) + u32::from(bit);
    }

    let n_bits = from_compact(compact_bits);
    // the wire supports wider difficulties than this client handles
    let n_bits = n_bits.to_u32().unwrap_or(u32::MAX);

    if n_bits < SIGNIFICANT_BITS {
        return (base, 0);
    }
    let trailing_zeros = n_bits - SIGNIFICANT_BITS;
    base <<= trailing_zeros;
    (base, trailing_zeros)
}

/// Verify a proof-of-work witness: `delta` must place a length-6 prime
/// constellation on the base derived from `hash` and `compact_bits`.
pub fn check_pow(
    hash: Hash256,
    compact_bits: CompactBits,
    delta: &Offset,
    params: &Params,
) -> Result<(), PowError> {
    // the genesis block predates the difficulty rules
    if hash == params.genesis_hash_for_pow {
        return Ok(());
    }

    if (compact_bits & SIGN_BIT) != 0 {
        return Err(PowError::MalformedCompact);
    }

    let (base, trailing_zeros) = generate_prime_base(hash, compact_bits);

    if trailing_zeros < 256 && !params.allow_min_difficulty_blocks {
        let delta_limit = BigUint::one() << trailing_zeros;
        if *delta >= delta_limit {
            return Err(PowError::OffsetOutOfRange);
        }
    }

    let candidate = base + delta;

    // 97 mod 210 keeps every member coprime to 2, 3, 5 and 7
    if (&candidate % 210u32) != BigUint::from(97u32) {
        return Err(PowError::WrongResidue);
    }

    for &(offset, witnesses, trial_division) in &WITNESS_SCHEDULE {
        let member = &candidate + u32::from(offset);
        if !is_probable_prime(&member, u32::from(witnesses), trial_division) {
            return Err(PowError::NotPrime { offset, witnesses });
        }
    }

    Ok(())
}
