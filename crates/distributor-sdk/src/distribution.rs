/*!
# Distribution Artifact

The compiled, off-line output of a distribution: the committed root, the payout
terms and one proof per eligible identity. It is written once by `compile` and
read by everything that hands out proofs or runs claims.
*/

use crate::compiler_error::{CompilerError, CompilerResult};
use distributor_csvs::ProofRow;
use distributor_merkle::{
    encoding::hex_hash, hash_identity, to_hex, Hash, Identity, MerkleProof, SCHEME_VERSION,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// One eligible identity with its leaf and proof
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimEntry {
    /// Leaf index in the eligibility set
    pub index: usize,
    pub identity: Identity,
    #[serde(with = "hex_hash")]
    pub leaf: Hash,
    pub proof: MerkleProof,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Distribution {
    /// Hashing scheme the root and proofs were built with
    pub scheme_version: u8,

    pub name: String,

    #[serde(with = "hex_hash")]
    pub root: Hash,

    /// Flat amount paid per successful claim
    pub amount_per_claim: u64,

    /// Total payout balance the distribution is funded with
    pub funding: u64,

    /// Entries in eligibility order
    pub claims: Vec<ClaimEntry>,

    #[serde(skip)]
    identity_to_index: HashMap<Identity, usize>,
}

impl Distribution {
    pub(crate) fn new(
        name: String,
        root: Hash,
        amount_per_claim: u64,
        funding: u64,
        claims: Vec<ClaimEntry>,
    ) -> Self {
        let identity_to_index = index_claims(&claims);
        Self {
            scheme_version: SCHEME_VERSION,
            name,
            root,
            amount_per_claim,
            funding,
            claims,
            identity_to_index,
        }
    }

    pub fn root_hex(&self) -> String {
        to_hex(&self.root)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn entry_for(&self, identity: &Identity) -> Option<&ClaimEntry> {
        self.identity_to_index
            .get(identity)
            .and_then(|index| self.claims.get(*index))
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.identity_to_index.contains_key(identity)
    }

    pub fn proof_for(&self, identity: &Identity) -> CompilerResult<&MerkleProof> {
        self.entry_for(identity)
            .map(|entry| &entry.proof)
            .ok_or(CompilerError::IdentityNotFound(*identity))
    }

    /// Rows for `proofs.csv`, in eligibility order.
    pub fn proof_rows(&self) -> Vec<ProofRow> {
        self.claims
            .iter()
            .map(|entry| ProofRow {
                index: entry.index,
                identity: entry.identity,
                leaf: entry.leaf,
                proof: entry.proof.as_slice().to_vec(),
            })
            .collect()
    }

    /// Check that every entry is consistent with the committed root.
    ///
    /// Fails if an index is out of order, a leaf does not match its identity,
    /// an identity repeats or a proof does not lead to the root.
    pub fn validate(&self) -> CompilerResult<()> {
        if self.scheme_version != SCHEME_VERSION {
            return Err(CompilerError::SchemeVersionMismatch {
                expected: SCHEME_VERSION,
                found: self.scheme_version,
            });
        }

        if self.claims.is_empty() {
            return Err(CompilerError::CorruptDistribution(
                "distribution has no claims".to_string(),
            ));
        }

        for (position, entry) in self.claims.iter().enumerate() {
            if entry.index != position {
                return Err(CompilerError::CorruptDistribution(format!(
                    "entry {} has index {}",
                    position, entry.index
                )));
            }
            if entry.leaf != hash_identity(&entry.identity) {
                return Err(CompilerError::CorruptDistribution(format!(
                    "leaf for {} does not match its identity",
                    entry.identity
                )));
            }
            if !entry.proof.verify(&self.root, &entry.leaf) {
                return Err(CompilerError::CorruptDistribution(format!(
                    "proof for {} does not lead to root {}",
                    entry.identity,
                    self.root_hex()
                )));
            }
        }

        if self.identity_to_index.len() != self.claims.len() {
            return Err(CompilerError::CorruptDistribution(
                "distribution lists an identity twice".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> CompilerResult<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        debug!(path = %path.as_ref().display(), claims = self.len(), "Saved distribution");
        Ok(())
    }

    /// Load a distribution and validate it against its root.
    pub fn load<P: AsRef<Path>>(path: P) -> CompilerResult<Self> {
        let file = File::open(path.as_ref())?;
        let mut distribution: Distribution = serde_json::from_reader(BufReader::new(file))?;
        distribution.identity_to_index = index_claims(&distribution.claims);
        distribution.validate()?;

        debug!(
            path = %path.as_ref().display(),
            root = %distribution.root_hex(),
            claims = distribution.len(),
            "Loaded distribution"
        );
        Ok(distribution)
    }
}

fn index_claims(claims: &[ClaimEntry]) -> HashMap<Identity, usize> {
    claims
        .iter()
        .enumerate()
        .map(|(position, entry)| (entry.identity, position))
        .collect()
}
