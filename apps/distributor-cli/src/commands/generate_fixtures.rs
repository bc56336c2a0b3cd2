use crate::error::CliResult;
use distributor_csvs::write_eligibility_csv;
use distributor_merkle::Identity;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use std::path::PathBuf;

/// Generate a deterministic eligibility set for testing and benchmarking
pub fn execute(count: usize, seed: u64, output: PathBuf) -> CliResult<()> {
    println!("Generating {} identities with seed {}", count, seed);

    let identities = generate_identities(count, seed);
    write_eligibility_csv(&output, &identities)?;

    println!("✅ Generated eligibility set: {}", output.display());
    Ok(())
}

pub(crate) fn generate_identities(count: usize, seed: u64) -> Vec<Identity> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(count);
    let mut identities = Vec::with_capacity(count);

    while identities.len() < count {
        let identity = Identity::new(rng.gen());
        if seen.insert(identity) {
            identities.push(identity);
        }
    }

    identities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_identities() {
        assert_eq!(generate_identities(50, 7), generate_identities(50, 7));
        assert_ne!(generate_identities(50, 7), generate_identities(50, 8));
    }

    #[test]
    fn test_identities_are_distinct() {
        let identities = generate_identities(200, 42);
        let unique: HashSet<_> = identities.iter().collect();
        assert_eq!(unique.len(), 200);
    }
}
