//! Cross-checks the arena tree against `rs_merkle` configured with the same
//! leaf/pair hashing rules. Both implementations carry an odd trailing node up
//! unchanged, so roots and proofs must agree for every tree size.

use distributor_merkle::{hash_identities, DistributorHasher, Hash, Identity, MerkleTree};
use rs_merkle::{Hasher, MerkleProof as RsMerkleProof, MerkleTree as RsMerkleTree};

#[derive(Clone)]
struct SortedPairHasher;

impl Hasher for SortedPairHasher {
    type Hash = [u8; 32];

    fn hash(data: &[u8]) -> [u8; 32] {
        DistributorHasher::hash_leaf(data)
    }

    fn concat_and_hash(left: &Self::Hash, right: Option<&Self::Hash>) -> Self::Hash {
        match right {
            Some(right_hash) => DistributorHasher::hash_pair(left, right_hash),
            // No right sibling: propagate the left hash
            None => *left,
        }
    }
}

fn leaves_for(count: usize) -> Vec<Hash> {
    let identities: Vec<Identity> = (0..count)
        .map(|i| {
            let mut bytes = [0u8; 32];
            bytes[..8].copy_from_slice(&(i as u64).to_le_bytes());
            Identity::new(bytes)
        })
        .collect();
    hash_identities(&identities)
}

#[test]
fn test_roots_match_rs_merkle() {
    for count in 1..=33 {
        let leaves = leaves_for(count);
        let ours = MerkleTree::from_leaves(leaves.clone()).unwrap();
        let reference = RsMerkleTree::<SortedPairHasher>::from_leaves(&leaves);

        assert_eq!(
            Some(ours.root()),
            reference.root(),
            "Roots should agree for {} leaves",
            count
        );
    }
}

#[test]
fn test_proofs_accepted_by_rs_merkle() {
    for count in [2usize, 3, 5, 8, 13, 21] {
        let leaves = leaves_for(count);
        let ours = MerkleTree::from_leaves(leaves.clone()).unwrap();
        let root = ours.root();

        for (index, leaf) in leaves.iter().enumerate() {
            let proof = ours.proof_at(index).unwrap();
            let reference_proof = RsMerkleProof::<SortedPairHasher>::new(proof.into_inner());

            assert!(
                reference_proof.verify(root, &[index], &[*leaf], count),
                "rs_merkle should accept proof for leaf {} of {}",
                index,
                count
            );
        }
    }
}
