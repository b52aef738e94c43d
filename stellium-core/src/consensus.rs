use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use crate::chain::BlockIndex;
use crate::compact::{from_compact, to_compact, CompactBits};
use crate::params::Params;
use crate::pow::{CONSTELLATION_SIZE, MIN_PRIME_SIZE_BITS};

/// Superblock difficulty factor: 95859 / 2^16, the 9th root of the
/// 4168/136 work ratio a superblock must carry.
pub const SUPERBLOCK_NUMER: u32 = 95_859;
pub const SUPERBLOCK_SHIFT: u32 = 16;

/// Expected search work scales with this power of the linear difficulty.
const PROOF_EXPONENT: u32 = 3 + CONSTELLATION_SIZE;

/// Superblock rules activate one block past the fork height.
pub fn is_after_fork1(height: u32, params: &Params) -> bool {
    height > params.fork1_height
}

/// A retarget window whose index is 12 mod 14 contains the weekly superblock.
pub fn is_in_superblock_interval(height: u32, params: &Params) -> bool {
    (height / params.adjustment_interval()) % 14 == 12
}

/// Superblocks sit at offset 144 inside their window, once per 14 windows.
pub fn is_superblock(height: u32, params: &Params) -> bool {
    height % params.adjustment_interval() == 144 && is_in_superblock_interval(height, params)
}

/// Work represented by a block: the decoded linear difficulty raised to
/// the 9th power.
pub fn block_proof(bits: CompactBits) -> BigUint {
    num_traits::pow(from_compact(bits), PROOF_EXPONENT as usize)
}

/// Greatest integer `r` with `r^root <= n`, by a doubling/halving search
/// climbing from `lower_bound`. The bound must not exceed the true root;
/// retargeting seeds it with half the previous difficulty.
pub fn nth_root(n: &BigUint, root: u32, lower_bound: &BigUint) -> BigUint {
    let one = BigUint::one();
    let mut result = lower_bound.clone();
    let mut delta = (lower_bound >> 1u32).max(one.clone());

    while delta >= one {
        result += &delta;
        if num_traits::pow(result.clone(), root as usize) > *n {
            result -= &delta;
            delta >>= 1u32;
        } else {
            delta <<= 1u32;
        }
    }
    result
}

/// Difficulty required for the block following `tip`.
///
/// Off an adjustment boundary the previous difficulty carries over, apart
/// from the weekly superblock spike, its restore on the next block, and
/// the min-difficulty slack on test networks. On a boundary the work
/// target is rescaled by the measured window timespan and re-rooted.
///
/// `next_block_time` is the prospective block's timestamp; only
/// min-difficulty networks consult it. A missing ancestor means the
/// caller handed in a disconnected index, which is a bug, and panics.
pub fn next_work_required<I: BlockIndex>(
    tip: &I,
    next_block_time: Option<i64>,
    params: &Params,
) -> CompactBits {
    let height = tip.height() + 1;
    let interval = params.adjustment_interval();

    if height % interval != 0 {
        if is_after_fork1(height, params) {
            if is_superblock(height, params) {
                let new_pow = (from_compact(tip.bits()) * SUPERBLOCK_NUMER) >> SUPERBLOCK_SHIFT;
                let bits = to_compact(new_pow);
                debug!("superblock difficulty at height {}: {:08x}", height, bits);
                return bits;
            } else if is_superblock(height - 1, params) {
                // the spike lasts one block; restore what it displaced
                return tip.parent().expect("superblock is never genesis").bits();
            }
        }

        if params.allow_min_difficulty_blocks {
            if let Some(time) = next_block_time {
                // a block this late may be mined at the minimum difficulty
                if time > tip.time() + 2 * params.target_spacing {
                    return params.pow_limit_compact();
                }
            }
            // Walk back to the last block that did not carry the minimum
            // difficulty. The comparison is against the raw bit-length
            // constant rather than its compact encoding, so on real
            // chains the walk stops at the first step; kept bit-exact for
            // compatibility with long-deployed validators.
            let mut index = tip.clone();
            loop {
                match index.parent() {
                    Some(parent)
                        if index.height() % interval != 0
                            && index.bits() == MIN_PRIME_SIZE_BITS =>
                    {
                        index = parent;
                    }
                    _ => break,
                }
            }
            return index.bits();
        }

        return tip.bits();
    }

    // go back by what we want to be one timespan worth of blocks
    let first_height = (tip.height() - (interval - 1)).max(1);
    let first = tip
        .ancestor(first_height)
        .expect("retarget window stays within the chain");

    calculate_next_work_required(tip, first.time(), params)
}

/// Boundary retarget: rescale the tip's work target by the measured
/// window timespan and take the integer 9th root.
pub fn calculate_next_work_required<I: BlockIndex>(
    tip: &I,
    first_block_time: i64,
    params: &Params,
) -> CompactBits {
    if params.no_retargeting {
        return tip.bits();
    }

    let height = tip.height() + 1;
    let interval = params.adjustment_interval();

    let mut actual_timespan = tip.time() - first_block_time;
    // the first window adjusts unclamped
    if height >= 2 * interval {
        actual_timespan =
            actual_timespan.clamp(params.target_timespan / 4, params.target_timespan * 4);
    }
    let actual_timespan = actual_timespan.max(1) as u64;

    let mut new_work = block_proof(tip.bits());
    new_work *= params.target_timespan as u64;
    new_work /= actual_timespan;

    if is_after_fork1(height, params) {
        if is_in_superblock_interval(height, params) {
            // the window we just closed contains the superblock spike
            new_work = new_work * 68u32 / 75u32;
            debug!("retarget window at height {} contains a superblock", height);
        } else if is_in_superblock_interval(height - 1, params) {
            new_work = new_work * 75u32 / 68u32;
            debug!("window before height {} contained a superblock", height);
        }
    }

    let lower_bound = from_compact(tip.bits()) >> 1u32;
    let mut new_diff = nth_root(&new_work, PROOF_EXPONENT, &lower_bound);

    if new_diff < params.pow_limit {
        new_diff = params.pow_limit.clone();
    } else if new_diff > BigUint::from(u32::MAX) {
        new_diff = BigUint::from(u32::MAX);
    }

    to_compact(new_diff)
}
