use crate::{
    encoding::{hash_from_slice, hex_hashes, parse_hash},
    error::MerkleResult,
    hasher::DistributorHasher,
    Hash,
};
use serde::{Deserialize, Serialize};

/// Ordered sibling hashes (bottom to top) that lead from a leaf to the root.
///
/// A proof carries no positions: each step combines the running hash with the
/// next sibling in ascending byte order, exactly as the tree builder does.
/// A proof means nothing on its own; it is only checked against a claimed
/// leaf and a committed root.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct MerkleProof(#[serde(with = "hex_hashes")] Vec<Hash>);

impl MerkleProof {
    pub fn new(siblings: Vec<Hash>) -> Self {
        Self(siblings)
    }

    /// Parse proof elements from hex strings.
    pub fn from_hex<S: AsRef<str>>(elements: &[S]) -> MerkleResult<Self> {
        elements
            .iter()
            .map(|s| parse_hash(s.as_ref()))
            .collect::<MerkleResult<Vec<_>>>()
            .map(Self)
    }

    /// Build a proof from raw byte elements, each of which must be 32 bytes.
    pub fn from_slices<B: AsRef<[u8]>>(elements: &[B]) -> MerkleResult<Self> {
        elements
            .iter()
            .map(|b| hash_from_slice(b.as_ref()))
            .collect::<MerkleResult<Vec<_>>>()
            .map(Self)
    }

    pub fn to_hex(&self) -> Vec<String> {
        self.0.iter().map(hex::encode).collect()
    }

    pub fn as_slice(&self) -> &[Hash] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Hash> {
        self.0
    }

    /// Fold the proof over `leaf` and return the resulting root.
    pub fn compute_root(&self, leaf: &Hash) -> Hash {
        compute_root(leaf, &self.0)
    }

    pub fn verify(&self, root: &Hash, leaf: &Hash) -> bool {
        verify_proof(leaf, &self.0, root)
    }
}

impl From<Vec<Hash>> for MerkleProof {
    fn from(siblings: Vec<Hash>) -> Self {
        Self(siblings)
    }
}

pub fn compute_root(leaf: &Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(*leaf, |acc, sibling| DistributorHasher::hash_pair(&acc, sibling))
}

/// Check that `proof` leads from `leaf` to `root`.
///
/// Pure and stateless: it does not need the tree that produced the proof.
/// A wrong sibling, wrong order, wrong leaf or wrong root all yield `false`.
pub fn verify_proof(leaf: &Hash, proof: &[Hash], root: &Hash) -> bool {
    compute_root(leaf, proof) == *root
}

/// Byte-slice entry point to [`verify_proof`].
///
/// Fails with `MalformedInput` only when the leaf, the root or any proof
/// element is not exactly 32 bytes; every other mismatch is `Ok(false)`.
pub fn verify_proof_bytes<B: AsRef<[u8]>>(
    leaf: &[u8],
    proof: &[B],
    root: &[u8],
) -> MerkleResult<bool> {
    let leaf = hash_from_slice(leaf)?;
    let root = hash_from_slice(root)?;
    let proof = MerkleProof::from_slices(proof)?;

    Ok(proof.verify(&root, &leaf))
}

/// Verify many `(leaf, proof)` pairs against the same root.
pub fn batch_verify_proofs(root: &Hash, entries: &[(Hash, &MerkleProof)]) -> Vec<bool> {
    entries
        .iter()
        .map(|(leaf, proof)| proof.verify(root, leaf))
        .collect()
}
