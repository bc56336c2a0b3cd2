use super::parse_identity;
use crate::error::{CliError, CliResult};
use distributor_merkle::{hash_identity, parse_hash, to_hex, MerkleProof};

/// Verify a proof for an identity against a root, without any distribution
/// file
pub fn execute(root: String, identity: String, proof: Vec<String>) -> CliResult<()> {
    let root = parse_hash(&root)?;
    let identity = parse_identity(&identity)?;
    let proof = MerkleProof::from_hex(&proof)?;

    let leaf = hash_identity(&identity);
    let computed = proof.compute_root(&leaf);

    println!("Leaf: {}", to_hex(&leaf));
    println!("Computed root: {}", to_hex(&computed));

    if computed == root {
        println!("✅ Valid proof for {}", identity);
        Ok(())
    } else {
        println!("❌ Invalid proof for {}", identity);
        Err(CliError::ProofRejected { root: to_hex(&root) })
    }
}
