/*!
# Distribution Compiler

Turns an eligibility set into a [`Distribution`]: hash every identity into a
leaf, build the tree once, and generate a proof for every leaf from that same
tree.
*/

use crate::compiler_error::{CompilerError, CompilerResult};
use crate::distribution::{ClaimEntry, Distribution};
use distributor_csvs::read_eligibility_csv;
use distributor_merkle::{hash_identities, to_hex, Identity, MerkleTree};
use std::path::Path;
use tracing::{info, warn};

/// Compile a distribution from identities in eligibility order.
///
/// # Arguments
/// * `name` - Human-readable distribution name
/// * `identities` - Eligible identities; position is the leaf index
/// * `amount_per_claim` - Flat amount paid per claim, must be non-zero
/// * `funding` - Total payout balance; a warning is logged if it cannot cover
///   every claim
pub fn compile_distribution(
    name: &str,
    identities: &[Identity],
    amount_per_claim: u64,
    funding: u64,
) -> CompilerResult<Distribution> {
    // Step 1: Validate payout terms
    if amount_per_claim == 0 {
        return Err(CompilerError::InvalidConfig(
            "amount_per_claim must be greater than zero".to_string(),
        ));
    }
    let total_payout = amount_per_claim
        .checked_mul(identities.len() as u64)
        .ok_or_else(|| {
            CompilerError::InvalidConfig(format!(
                "total payout overflows: {} x {}",
                amount_per_claim,
                identities.len()
            ))
        })?;
    if funding < total_payout {
        warn!(
            funding,
            total_payout, "Distribution is underfunded; late claims will be rejected"
        );
    }

    // Step 2: Encode leaves and build the tree
    let leaves = hash_identities(identities);
    let tree = MerkleTree::from_leaves(leaves)?;
    let root = tree.root();

    // Step 3: Generate one proof per leaf from the same build
    let claims = identities
        .iter()
        .zip(tree.leaves())
        .enumerate()
        .map(|(index, (identity, leaf))| -> CompilerResult<ClaimEntry> {
            Ok(ClaimEntry {
                index,
                identity: *identity,
                leaf: *leaf,
                proof: tree.proof_at(index)?,
            })
        })
        .collect::<CompilerResult<Vec<_>>>()?;

    info!(
        name,
        root = %to_hex(&root),
        claims = claims.len(),
        depth = tree.depth(),
        "Compiled distribution"
    );

    Ok(Distribution::new(
        name.to_string(),
        root,
        amount_per_claim,
        funding,
        claims,
    ))
}

/// Compile a distribution from an eligibility CSV file.
pub fn compile_distribution_from_csv(
    name: &str,
    eligibility_csv: &Path,
    amount_per_claim: u64,
    funding: u64,
) -> CompilerResult<Distribution> {
    let identities = read_eligibility_csv(eligibility_csv)?;
    compile_distribution(name, &identities, amount_per_claim, funding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use distributor_csvs::write_eligibility_csv;
    use distributor_merkle::{hash_identity, MerkleError};
    use tempfile::TempDir;

    fn identities(count: u8) -> Vec<Identity> {
        (1..=count).map(|i| Identity::new([i; 32])).collect()
    }

    #[test]
    fn test_compile_produces_valid_proofs() {
        let ids = identities(7);
        let distribution = compile_distribution("test", &ids, 25, 175).unwrap();

        assert_eq!(distribution.len(), 7);
        distribution.validate().unwrap();
        for id in &ids {
            let proof = distribution.proof_for(id).unwrap();
            assert!(proof.verify(&distribution.root, &hash_identity(id)));
        }
    }

    #[test]
    fn test_compile_is_deterministic() {
        let ids = identities(9);
        let first = compile_distribution("a", &ids, 1, 9).unwrap();
        let second = compile_distribution("a", &ids, 1, 9).unwrap();

        assert_eq!(first.root, second.root);
        assert_eq!(first.claims, second.claims);
    }

    #[test]
    fn test_compile_single_identity() {
        let ids = identities(1);
        let distribution = compile_distribution("solo", &ids, 5, 5).unwrap();

        assert_eq!(distribution.root, hash_identity(&ids[0]));
        assert!(distribution.claims[0].proof.is_empty());
    }

    #[test]
    fn test_compile_rejects_empty_set() {
        let result = compile_distribution("empty", &[], 5, 0);
        assert!(matches!(
            result,
            Err(CompilerError::Merkle(MerkleError::EmptyEligibilitySet))
        ));
    }

    #[test]
    fn test_compile_rejects_duplicates() {
        let mut ids = identities(3);
        ids.push(ids[0]);

        assert!(matches!(
            compile_distribution("dup", &ids, 5, 20),
            Err(CompilerError::Merkle(MerkleError::DuplicateLeaf { index: 3, .. }))
        ));
    }

    #[test]
    fn test_compile_rejects_zero_amount() {
        assert!(matches!(
            compile_distribution("zero", &identities(2), 0, 0),
            Err(CompilerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_compile_from_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eligibility.csv");
        let ids = identities(4);
        write_eligibility_csv(&path, &ids).unwrap();

        let distribution = compile_distribution_from_csv("csv", &path, 3, 12).unwrap();
        let expected = compile_distribution("csv", &ids, 3, 12).unwrap();
        assert_eq!(distribution, expected);
    }
}
