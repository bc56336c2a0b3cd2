use crate::{
    encoding::to_hex,
    error::{MerkleError, MerkleResult},
    hasher::DistributorHasher,
    proof::MerkleProof,
    Hash,
};
use std::collections::HashMap;
use tracing::debug;

/// Binary merkle tree stored as an arena of levels.
///
/// `levels[0]` holds the leaf hashes in input order, each following level
/// holds the parents of the level below, and the last level holds only the
/// root. A node at `(level, i)` has its parent at `(level + 1, i / 2)`.
///
/// Pairs are combined with [`DistributorHasher::hash_pair`]. When a level has
/// an odd number of nodes the last one is carried up to the next level
/// unchanged; it is never paired with itself.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    levels: Vec<Vec<Hash>>,
    leaf_to_index: HashMap<Hash, usize>,
}

impl MerkleTree {
    /// Build the tree from leaf hashes. Leaves must be distinct.
    pub fn from_leaves(leaves: Vec<Hash>) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyEligibilitySet);
        }

        let mut leaf_to_index = HashMap::with_capacity(leaves.len());
        for (index, leaf) in leaves.iter().enumerate() {
            if leaf_to_index.insert(*leaf, index).is_some() {
                return Err(MerkleError::DuplicateLeaf {
                    index,
                    leaf: to_hex(leaf),
                });
            }
        }

        let leaf_count = leaves.len();
        let mut levels = vec![leaves];

        while let Some(current) = levels.last().filter(|level| level.len() > 1) {
            let next: Vec<Hash> = current
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => DistributorHasher::hash_pair(left, right),
                    // odd trailing node
                    _ => pair[0],
                })
                .collect();
            levels.push(next);
        }

        debug!(
            leaf_count,
            depth = levels.len() - 1,
            "Built merkle tree"
        );

        Ok(Self {
            levels,
            leaf_to_index,
        })
    }

    pub fn root(&self) -> Hash {
        // from_leaves guarantees at least one level ending in a single node
        self.levels[self.levels.len() - 1][0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.levels[0]
    }

    /// All levels, leaves first and root last.
    pub fn levels(&self) -> &[Vec<Hash>] {
        &self.levels
    }

    /// Number of levels above the leaves.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaf_index(&self, leaf: &Hash) -> Option<usize> {
        self.leaf_to_index.get(leaf).copied()
    }

    /// Generate the proof for a leaf hash, located by exact match.
    pub fn proof(&self, leaf: &Hash) -> MerkleResult<MerkleProof> {
        let index = self
            .leaf_index(leaf)
            .ok_or_else(|| MerkleError::LeafNotFound(to_hex(leaf)))?;
        self.proof_at(index)
    }

    /// Generate the proof for the leaf at `leaf_index`.
    ///
    /// Siblings are collected bottom to top. A level where the node was
    /// carried up unpaired contributes nothing.
    pub fn proof_at(&self, leaf_index: usize) -> MerkleResult<MerkleProof> {
        if leaf_index >= self.leaf_count() {
            return Err(MerkleError::InvalidLeafIndex {
                index: leaf_index,
                leaf_count: self.leaf_count(),
            });
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut index = leaf_index;

        for level in self.levels.iter().take(self.depth()) {
            let sibling_index = index ^ 1;
            if let Some(sibling) = level.get(sibling_index) {
                siblings.push(*sibling);
            }
            index /= 2;
        }

        Ok(MerkleProof::new(siblings))
    }
}
