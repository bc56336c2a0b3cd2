use crate::constants::{INTERNAL_PREFIX, LEAF_PREFIX};
use crate::Hash;
use sha2::{Digest, Sha256};

/// Hashing rules for the distribution tree.
///
/// ## Domain Separation
///
/// - **Leaf nodes**: `SHA256(0x00 || leaf_data)`
/// - **Internal nodes**: `SHA256(0x01 || lower_hash || higher_hash)`
///
/// The prefixes keep a leaf hash from ever being reinterpreted as an internal
/// node (second preimage / node confusion). Ordering the two children by
/// byte value means a proof never has to carry a left/right position bit.
#[derive(Clone, Debug, Default)]
pub struct DistributorHasher;

impl DistributorHasher {
    pub fn hash_leaf(data: &[u8]) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update([LEAF_PREFIX]);
        hasher.update(data);
        hasher.finalize().into()
    }

    /// Combine two sibling hashes into their parent. Argument order does not
    /// affect the result.
    pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
        let (lower, higher) = if a <= b { (a, b) } else { (b, a) };

        let mut hasher = Sha256::new();
        hasher.update([INTERNAL_PREFIX]);
        hasher.update(lower);
        hasher.update(higher);
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_ordering_is_irrelevant() {
        let hash1 = [1u8; 32];
        let hash2 = [2u8; 32];

        let result1 = DistributorHasher::hash_pair(&hash1, &hash2);
        let result2 = DistributorHasher::hash_pair(&hash2, &hash1);

        assert_eq!(
            result1, result2,
            "Hash ordering should be consistent regardless of input order"
        );

        // hash1 < hash2 lexicographically
        let mut expected_hasher = Sha256::new();
        expected_hasher.update([0x01]);
        expected_hasher.update(hash1);
        expected_hasher.update(hash2);
        let expected: Hash = expected_hasher.finalize().into();

        assert_eq!(result1, expected, "Hash should match manual calculation");
    }

    #[test]
    fn test_leaf_prefix_changes_hash() {
        let data = [9u8; 32];

        let prefixed = DistributorHasher::hash_leaf(&data);
        let direct: Hash = Sha256::digest(data).into();

        assert_ne!(
            prefixed, direct,
            "Prefixed leaf hash should differ from a bare SHA256 of the data"
        );
    }

    #[test]
    fn test_leaf_and_internal_domains_differ() {
        // 64 bytes hashed as a leaf must not collide with the same 64 bytes
        // hashed as an internal node.
        let a = [3u8; 32];
        let b = [4u8; 32];
        let mut concatenated = Vec::with_capacity(64);
        concatenated.extend_from_slice(&a);
        concatenated.extend_from_slice(&b);

        assert_ne!(
            DistributorHasher::hash_leaf(&concatenated),
            DistributorHasher::hash_pair(&a, &b)
        );
    }
}
