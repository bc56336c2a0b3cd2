use crate::{hasher::DistributorHasher, identity::Identity, Hash};

/// Canonical leaf hash of an identity: `SHA256(0x00 || identity_bytes)`.
///
/// The encoding is the raw 32 identity bytes with no length prefix, no text
/// formatting and no platform-dependent representation, so the off-line
/// builder and the claim-time verifier always agree.
pub fn hash_identity(identity: &Identity) -> Hash {
    DistributorHasher::hash_leaf(identity.as_bytes())
}

/// Hash a whole eligibility list, preserving order.
pub fn hash_identities(identities: &[Identity]) -> Vec<Hash> {
    identities.iter().map(hash_identity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn test_hash_identity_consistent() {
        let a = Identity::new([1u8; 32]);
        let a_again = Identity::new([1u8; 32]);
        let b = Identity::new([2u8; 32]);

        assert_eq!(
            hash_identity(&a),
            hash_identity(&a_again),
            "Hashes for identical identities should be the same."
        );
        assert_ne!(
            hash_identity(&a),
            hash_identity(&b),
            "Hashes for different identities should be different."
        );
    }

    #[test]
    fn test_hash_identity_matches_manual_encoding() {
        let identity = Identity::new([0xaa; 32]);

        let mut hasher = Sha256::new();
        hasher.update([0x00]);
        hasher.update([0xaa; 32]);
        let expected: Hash = hasher.finalize().into();

        assert_eq!(hash_identity(&identity), expected);
    }
}
