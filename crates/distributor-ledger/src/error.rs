use distributor_merkle::{Identity, MerkleError};
use thiserror::Error;

pub type ClaimResult<T> = Result<T, ClaimError>;

/// Every variant leaves the ledger unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Drop already claimed by {0}")]
    AlreadyClaimed(Identity),

    #[error("Invalid merkle proof for {0}")]
    InvalidProof(Identity),

    #[error("Insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("Claim store error: {0}")]
    Storage(String),
}

impl From<MerkleError> for ClaimError {
    fn from(err: MerkleError) -> Self {
        match err {
            MerkleError::MalformedInput(msg) => ClaimError::MalformedInput(msg),
            other => ClaimError::MalformedInput(other.to_string()),
        }
    }
}
