use crate::error::hash::HashError;

pub const HASH_SIZE: usize = 32;

/// 256-bit header hash in little-endian byte order: byte 0 carries integer
/// bits 0..8. This is the order the prime-base builder consumes.
pub type Hash256 = [u8; HASH_SIZE];

/// Parse a display-order (big-endian) hex string into a hash.
///
/// Accepts an optional `0x` prefix. Explorers and chain parameters print
/// hashes big-endian, so the bytes are reversed on the way in.
pub fn hash256_from_hex(s: &str) -> Result<Hash256, HashError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|_| HashError::InvalidHex)?;
    if bytes.len() != HASH_SIZE {
        return Err(HashError::InvalidLength);
    }

    let mut out = [0u8; HASH_SIZE];
    for (i, b) in bytes.iter().rev().enumerate() {
        out[i] = *b;
    }
    Ok(out)
}

/// Format a hash in display order (big-endian).
pub fn hash256_to_hex(hash: &Hash256) -> String {
    let mut bytes = *hash;
    bytes.reverse();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let s = "26d0466d5a0eab0ebf171eacb98146b26143d143463514f26b28d3cded81c1bb";
        let hash = hash256_from_hex(s).expect("Failed to parse hash hex");
        assert_eq!(hash256_to_hex(&hash), s);
        // display order is reversed: the last hex byte is byte 0
        assert_eq!(hash[0], 0xbb);
        assert_eq!(hash[HASH_SIZE - 1], 0x26);
    }

    #[test]
    fn test_hex_prefix_accepted() {
        let bare = hash256_from_hex("11".repeat(32).as_str()).expect("Failed to parse bare hex");
        let prefixed =
            hash256_from_hex(format!("0x{}", "11".repeat(32)).as_str()).expect("Failed to parse prefixed hex");
        assert_eq!(bare, prefixed);
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert_eq!(hash256_from_hex("zz").unwrap_err(), HashError::InvalidHex);
        assert_eq!(hash256_from_hex("1234").unwrap_err(), HashError::InvalidLength);
    }
}
