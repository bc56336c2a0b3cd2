use crate::config::DistributionConfig;
use crate::error::CliResult;
use distributor_csvs::{read_eligibility_csv, write_proofs_csv};
use distributor_sdk::compile_distribution;
use std::path::PathBuf;
use tracing::info;

/// Compile a distribution from its YAML config
pub fn execute(config: PathBuf, output: PathBuf, proofs_csv: Option<PathBuf>) -> CliResult<()> {
    let config = DistributionConfig::load(&config)?;
    info!(name = %config.name, csv = %config.eligibility_csv.display(), "Compiling distribution");

    let identities = read_eligibility_csv(&config.eligibility_csv)?;
    let funding = config.funding_for(identities.len())?;
    let distribution =
        compile_distribution(&config.name, &identities, config.amount_per_claim, funding)?;

    distribution.save(&output)?;
    println!("✅ Compiled '{}'", distribution.name);
    println!("   Root: {}", distribution.root_hex());
    println!("   Claims: {}", distribution.len());
    println!("   Amount per claim: {}", distribution.amount_per_claim);
    println!("   Funding: {}", distribution.funding);
    println!("   Written to: {}", output.display());

    if let Some(path) = proofs_csv {
        write_proofs_csv(&path, &distribution.proof_rows())?;
        println!("   Proofs written to: {}", path.display());
    }

    Ok(())
}
