/// Reasons a proof-of-work witness is rejected. None of these are
/// retryable; the block carrying the witness is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowError {
    /// Candidate offset at or above `2^trailing_zeros` on a strict-difficulty network.
    OffsetOutOfRange,
    /// Base plus offset is not 97 mod 210.
    WrongResidue,
    /// A constellation member failed primality at the identified step.
    NotPrime { offset: u8, witnesses: u8 },
    /// Compact difficulty with the sign bit set.
    MalformedCompact,
}

impl std::fmt::Display for PowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowError::NotPrime { offset, witnesses } => {
                write!(f, "n+{} not prime ({} witnesses)", offset, witnesses)
            }
            _ => write!(f, "{:?}", self),
        }
    }
}

impl std::error::Error for PowError {}
