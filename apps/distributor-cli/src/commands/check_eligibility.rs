use super::parse_identity;
use crate::error::CliResult;
use distributor_ledger::JsonFileClaimStore;
use distributor_sdk::{check_eligibility, Distribution, EligibilityStatus};
use std::path::PathBuf;

/// Report membership and claimed status for an identity
pub fn execute(distribution: PathBuf, state: PathBuf, identity: String) -> CliResult<()> {
    let distribution = Distribution::load(&distribution)?;
    let identity = parse_identity(&identity)?;
    let store = JsonFileClaimStore::open(&state, &distribution.root)?;

    println!("🔍 Checking eligibility for {}", identity);
    println!("   Distribution: {} ({})", distribution.name, distribution.root_hex());

    match check_eligibility(&distribution, &store, &identity) {
        EligibilityStatus::NotEligible => {
            println!("❌ Not eligible");
        }
        EligibilityStatus::Unclaimed { index } => {
            println!("✅ Eligible (leaf {}), not yet claimed", index);
            println!("   Claimable: {}", distribution.amount_per_claim);
        }
        EligibilityStatus::Claimed { index, receipt } => {
            println!("✅ Eligible (leaf {}), already claimed", index);
            println!(
                "   Claimed {} at {}",
                receipt.amount,
                receipt.claimed_at.to_rfc3339()
            );
        }
    }

    Ok(())
}
