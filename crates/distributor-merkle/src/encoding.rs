//! Hex encoding of 32-byte values.
//!
//! Roots, leaves, proof elements and identities all travel as 64 hex digits
//! (without `0x` prefix on output; the prefix is accepted on input).

use crate::{
    constants::HASH_LEN,
    error::{MerkleError, MerkleResult},
    Hash,
};
use serde::Deserialize;

/// Parse a 32-byte value from hex, with or without a `0x` prefix.
pub fn parse_hash(s: &str) -> MerkleResult<Hash> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let bytes = hex::decode(digits)
        .map_err(|e| MerkleError::MalformedInput(format!("invalid hex '{}': {}", s, e)))?;

    hash_from_slice(&bytes)
}

/// Copy a byte slice into a 32-byte array, rejecting any other length.
pub fn hash_from_slice(bytes: &[u8]) -> MerkleResult<Hash> {
    bytes.try_into().map_err(|_| {
        MerkleError::MalformedInput(format!(
            "expected {} bytes, got {}",
            HASH_LEN,
            bytes.len()
        ))
    })
}

pub fn to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}

/// Serde adapter for a single `[u8; 32]` as a hex string.
pub mod hex_hash {
    use super::*;

    pub fn serialize<S>(bytes: &Hash, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Hash, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hash(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for a `Vec<[u8; 32]>` as a list of hex strings.
pub mod hex_hashes {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S>(hashes: &[Hash], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(hashes.len()))?;
        for hash in hashes {
            seq.serialize_element(&hex::encode(hash))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Hash>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| parse_hash(s).map_err(serde::de::Error::custom))
            .collect()
    }
}
