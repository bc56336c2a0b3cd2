use super::parse_identity;
use crate::error::CliResult;
use distributor_merkle::MerkleProof;
use distributor_sdk::{open_ledger, Distribution};
use std::path::PathBuf;

/// Claim for an identity against the persisted claim state.
///
/// Without `--proof` the proof stored in the distribution is used.
pub fn execute(
    distribution: PathBuf,
    state: PathBuf,
    identity: String,
    proof: Vec<String>,
) -> CliResult<()> {
    let distribution = Distribution::load(&distribution)?;
    let identity = parse_identity(&identity)?;

    let proof = if proof.is_empty() {
        distribution.proof_for(&identity)?.clone()
    } else {
        MerkleProof::from_hex(&proof)?
    };

    let ledger = open_ledger(&distribution, &state)?;
    let receipt = ledger.claim(&identity, &proof)?;

    println!("✅ Claimed {} for {}", receipt.amount, receipt.identity);
    println!("   At: {}", receipt.claimed_at.to_rfc3339());
    println!(
        "   Remaining funding: {}",
        ledger.with_payout(|treasury| treasury.balance())
    );

    Ok(())
}
