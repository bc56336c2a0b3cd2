use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] distributor_csvs::CsvError),

    #[error("Merkle error: {0}")]
    Merkle(#[from] distributor_merkle::MerkleError),

    #[error("Claim rejected: {0}")]
    Claim(#[from] distributor_ledger::ClaimError),

    #[error("Distribution error: {0}")]
    Compiler(#[from] distributor_sdk::CompilerError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Proof does not lead to root {root}")]
    ProofRejected { root: String },
}
