use crate::{
    encoding::{hash_from_slice, parse_hash},
    error::{MerkleError, MerkleResult},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque 32-byte identifier of a claimant (e.g. an account address).
///
/// The textual form is 64 hex digits; a `0x` prefix is accepted when parsing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity([u8; 32]);

impl Identity {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> MerkleResult<Self> {
        hash_from_slice(bytes).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Identity {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Identity {
    type Err = MerkleError;

    fn from_str(s: &str) -> MerkleResult<Self> {
        parse_hash(s)
            .map(Self)
            .map_err(|e| MerkleError::MalformedInput(format!("identity: {}", e)))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Identity::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_display_roundtrip() {
        let identity = Identity::new([7u8; 32]);
        let parsed: Identity = identity.to_string().parse().unwrap();
        assert_eq!(identity, parsed);
        assert_eq!(identity.to_string().len(), 64);
    }

    #[test]
    fn test_identity_rejects_account_address_length() {
        // 20-byte addresses are not valid identities in this scheme
        let result = Identity::from_str("0x4dE8dabfdc4D5A508F6FeA28C6f1B288bbdDc26e");
        assert!(matches!(result, Err(MerkleError::MalformedInput(_))));
    }

    #[test]
    fn test_identity_serde_as_hex_string() {
        let identity = Identity::new([0x11; 32]);
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, format!("\"{}\"", "11".repeat(32)));

        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }
}
