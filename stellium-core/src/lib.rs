//! Consensus core for the Stellium prime-constellation proof of work:
//! witness verification and difficulty retargeting. Stateless and pure;
//! callers bring their own block index and header hashing.

pub mod chain;
pub mod compact;
pub mod consensus;
pub mod error;
pub mod hash;
pub mod params;
pub mod pow;
pub mod primality;

pub use chain::{BlockIndex, ChainView, HeaderChain, IndexEntry};
pub use compact::{compact_cmp, from_compact, to_compact, CompactBits};
pub use consensus::{is_superblock, next_work_required};
pub use error::pow::PowError;
pub use hash::{Hash256, HASH_SIZE};
pub use params::Params;
pub use pow::{check_pow, generate_prime_base, Offset};
