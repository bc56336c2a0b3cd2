/*!
# CSV Schema Definitions

Authoritative CSV schemas for a distribution. These are the contract between:
- `generate-fixtures` (producer of `eligibility.csv`)
- `compile` (consumer of `eligibility.csv`, producer of `proofs.csv`)
- whoever hands proofs out to claimants (consumer of `proofs.csv`)
*/

use distributor_merkle::{encoding::hex_hash, parse_hash, Hash, Identity, MerkleResult};
use serde::{Deserialize, Serialize};

/// Separator between proof elements inside a single `proofs.csv` cell
pub const PROOF_ELEMENT_SEPARATOR: char = ':';

// ================================================================================================
// Eligibility CSV Schema
// ================================================================================================

/// Expected headers for eligibility.csv in exact order
pub const ELIGIBILITY_CSV_HEADERS: &[&str] = &["identity"];

/// Row structure for eligibility.csv
///
/// **File**: `eligibility.csv`
/// **Purpose**: The eligibility set. Row order is the leaf index.
/// **Producer**: `generate-fixtures` command
/// **Consumers**: `compile` command
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibilityRow {
    /// Claimant identity, 64 hex digits
    pub identity: Identity,
}

// ================================================================================================
// Proofs CSV Schema
// ================================================================================================

/// Expected headers for proofs.csv in exact order
pub const PROOFS_CSV_HEADERS: &[&str] = &["index", "identity", "leaf", "proof"];

/// Row structure for proofs.csv
///
/// **File**: `proofs.csv`
/// **Purpose**: One proof per eligible identity, for distribution to claimants
/// **Producer**: `compile` command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofRow {
    /// Leaf index in the eligibility set
    pub index: usize,

    pub identity: Identity,

    /// Leaf hash in hex format (without 0x prefix)
    #[serde(with = "hex_hash")]
    pub leaf: Hash,

    /// Sibling hashes bottom to top, hex encoded and joined by `:`
    #[serde(
        deserialize_with = "deserialize_proof",
        serialize_with = "serialize_proof"
    )]
    pub proof: Vec<Hash>,
}

// ================================================================================================
// Custom Serde Functions
// ================================================================================================

/// Deserialize `:`-joined hex string to proof elements
fn deserialize_proof<'de, D>(deserializer: D) -> Result<Vec<Hash>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_proof_cell(&s).map_err(serde::de::Error::custom)
}

/// Split a `proof` cell into its elements. An empty cell is an empty proof.
pub(crate) fn parse_proof_cell(cell: &str) -> MerkleResult<Vec<Hash>> {
    if cell.is_empty() {
        return Ok(Vec::new());
    }
    cell.split(PROOF_ELEMENT_SEPARATOR).map(parse_hash).collect()
}

/// Serialize proof elements to a `:`-joined hex string
fn serialize_proof<S>(proof: &[Hash], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let joined = proof
        .iter()
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(&PROOF_ELEMENT_SEPARATOR.to_string());
    serializer.serialize_str(&joined)
}

// ================================================================================================
// Tests
// ================================================================================================
