#[cfg(test)]
mod tests {
    use crate::chain::{BlockIndex, HeaderChain, Serializable};
    use crate::params::Params;

    /// Helper: chain of `count` blocks with fixed spacing and bits
    fn make_chain(count: u32, spacing: i64, bits: u32) -> HeaderChain {
        let mut chain = HeaderChain::new();
        for height in 0..count {
            chain.push(1_000_000 + i64::from(height) * spacing, bits);
        }
        chain
    }

    #[test]
    fn test_genesis_chain() {
        let params = Params::mainnet();
        let chain = HeaderChain::with_genesis(1_392_079_741, &params);

        assert_eq!(chain.len(), 1);
        let tip = chain.tip().expect("Failed to get tip of genesis chain");
        assert_eq!(tip.height(), 0);
        assert_eq!(tip.bits(), params.pow_limit_compact());
        assert_eq!(tip.time(), 1_392_079_741);
    }

    #[test]
    fn test_empty_chain_has_no_tip() {
        let chain = HeaderChain::new();
        assert!(chain.is_empty());
        assert!(chain.tip().is_none());
        assert!(chain.at(0).is_none());
    }

    #[test]
    fn test_parent_links() {
        let chain = make_chain(3, 150, 0x02013000);
        let tip = chain.tip().expect("Failed to get tip");

        assert_eq!(tip.height(), 2);
        let parent = tip.parent().expect("Failed to get parent");
        assert_eq!(parent.height(), 1);
        let grandparent = parent.parent().expect("Failed to get grandparent");
        assert_eq!(grandparent.height(), 0);
        assert!(grandparent.parent().is_none());
    }

    #[test]
    fn test_ancestor_lookup() {
        let chain = make_chain(300, 150, 0x02013000);
        let tip = chain.tip().expect("Failed to get tip");

        let first = tip.ancestor(12).expect("Failed to get ancestor");
        assert_eq!(first.height(), 12);
        assert_eq!(first.time(), 1_000_000 + 12 * 150);

        // ancestors never sit above the cursor
        assert!(first.ancestor(13).is_none());
        assert!(tip.ancestor(300).is_none());
    }

    #[test]
    fn test_iter_order() {
        let chain = make_chain(5, 10, 0x02013000);
        let times: Vec<_> = chain.iter().map(|e| e.time).collect();
        assert_eq!(times, vec![1_000_000, 1_000_010, 1_000_020, 1_000_030, 1_000_040]);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let chain = make_chain(4, 150, 0x02013000);
        let bytes = chain.serialize().expect("Failed to serialize chain");
        let decoded = HeaderChain::from_bytes(&bytes).expect("Failed to decode chain from bytes");
        assert_eq!(chain, decoded);
    }
}
