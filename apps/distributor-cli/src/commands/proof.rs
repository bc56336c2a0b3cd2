use super::parse_identity;
use crate::error::CliResult;
use distributor_sdk::Distribution;
use std::path::PathBuf;

/// Print the proof for one identity
pub fn execute(distribution: PathBuf, identity: String) -> CliResult<()> {
    let distribution = Distribution::load(&distribution)?;
    let identity = parse_identity(&identity)?;
    let proof = distribution.proof_for(&identity)?;

    println!("Root: {}", distribution.root_hex());
    println!("Identity: {}", identity);
    println!("Proof ({} elements):", proof.len());
    for element in proof.to_hex() {
        println!("  {}", element);
    }

    Ok(())
}
