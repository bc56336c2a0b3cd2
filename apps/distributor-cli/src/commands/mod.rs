pub mod check_eligibility;
pub mod claim;
pub mod compile;
pub mod generate_fixtures;
pub mod proof;
pub mod verify;

use crate::error::CliResult;
use distributor_merkle::Identity;
use std::str::FromStr;

/// Parse an identity argument (64 hex digits, optional `0x`)
pub(crate) fn parse_identity(raw: &str) -> CliResult<Identity> {
    Ok(Identity::from_str(raw.trim())?)
}
