use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    #[error("Invalid identity on line {line}: {reason}")]
    InvalidIdentity { line: u64, reason: String },

    #[error("Invalid hash on line {line}: {reason}")]
    InvalidHash { line: u64, reason: String },

    #[error("Duplicate identity {identity} on line {line}")]
    DuplicateIdentity { line: u64, identity: String },
}
