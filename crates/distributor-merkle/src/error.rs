use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Eligibility set is empty")]
    EmptyEligibilitySet,

    #[error("Duplicate leaf at index {index}: {leaf}")]
    DuplicateLeaf { index: usize, leaf: String },

    #[error("Leaf not found in tree: {0}")]
    LeafNotFound(String),

    #[error("Leaf index {index} out of bounds (tree has {leaf_count} leaves)")]
    InvalidLeafIndex { index: usize, leaf_count: usize },
}
