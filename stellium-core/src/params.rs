use num_bigint::BigUint;

use crate::compact::{to_compact, CompactBits};
use crate::hash::{hash256_from_hex, Hash256};
use crate::pow::MIN_PRIME_SIZE_BITS;

/// Consensus parameters for one network. The core only ever reads these.
#[derive(Clone, Debug)]
pub struct Params {
    /// Blocks between reward halvings. Belongs to the subsidy schedule;
    /// carried here so the record is complete.
    pub subsidy_halving_interval: u32,
    /// Easiest allowed difficulty, as a plain bit count (not a hash
    /// target): the minimum width of the base prime.
    pub pow_limit: BigUint,
    /// Nominal length of one retarget window, seconds.
    pub target_timespan: i64,
    /// Nominal block spacing, seconds.
    pub target_spacing: i64,
    /// Test networks may fall back to the minimum difficulty.
    pub allow_min_difficulty_blocks: bool,
    /// Freeze difficulty entirely (regression testing).
    pub no_retargeting: bool,
    /// Height after which the superblock schedule is active.
    pub fork1_height: u32,
    /// The block with this PoW hash skips verification outright.
    pub genesis_hash_for_pow: Hash256,
}

impl Params {
    pub fn mainnet() -> Self {
        Self {
            subsidy_halving_interval: 840_000,
            pow_limit: BigUint::from(MIN_PRIME_SIZE_BITS),
            target_timespan: 12 * 60 * 60,
            target_spacing: 150,
            allow_min_difficulty_blocks: false,
            no_retargeting: false,
            fork1_height: 159_000,
            genesis_hash_for_pow: hash256_from_hex(
                "26d0466d5a0eab0ebf171eacb98146b26143d143463514f26b28d3cded81c1bb",
            )
            .expect("mainnet genesis hash is well formed"),
        }
    }

    pub fn testnet() -> Self {
        Self {
            subsidy_halving_interval: 840_000,
            pow_limit: BigUint::from(MIN_PRIME_SIZE_BITS),
            target_timespan: 12 * 60 * 60,
            target_spacing: 150,
            allow_min_difficulty_blocks: true,
            no_retargeting: false,
            fork1_height: 3_000,
            genesis_hash_for_pow: hash256_from_hex(
                "000000002a936ca763904c3c35fce2f3556c559c0214345d31b1bcebf76acb70",
            )
            .expect("testnet genesis hash is well formed"),
        }
    }

    pub fn regtest() -> Self {
        Self {
            subsidy_halving_interval: 150,
            pow_limit: BigUint::from(MIN_PRIME_SIZE_BITS),
            target_timespan: 12 * 60 * 60,
            target_spacing: 150,
            allow_min_difficulty_blocks: true,
            no_retargeting: true,
            fork1_height: 3_000,
            genesis_hash_for_pow: hash256_from_hex(
                "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206",
            )
            .expect("regtest genesis hash is well formed"),
        }
    }

    /// Blocks per retarget window: `target_timespan / target_spacing`.
    pub fn adjustment_interval(&self) -> u32 {
        (self.target_timespan / self.target_spacing) as u32
    }

    /// Compact encoding of the easiest difficulty; also the genesis bits.
    pub fn pow_limit_compact(&self) -> CompactBits {
        to_compact(self.pow_limit.clone())
    }
}
