use distributor_merkle::Identity;

#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    #[error(transparent)]
    Claim(#[from] distributor_ledger::ClaimError),

    #[error(transparent)]
    Csv(#[from] distributor_csvs::CsvError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Merkle(#[from] distributor_merkle::MerkleError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Scheme version mismatch: expected {expected}, found {found}")]
    SchemeVersionMismatch { expected: u8, found: u8 },

    #[error("Corrupt distribution: {0}")]
    CorruptDistribution(String),

    #[error("Identity {0} is not in the distribution")]
    IdentityNotFound(Identity),
}

pub type CompilerResult<T> = Result<T, CompilerError>;
