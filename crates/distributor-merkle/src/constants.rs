//! Hashing scheme constants shared by the tree builder and the verifier.
//!
//! Any change to these values invalidates every root and proof produced under
//! the previous values, so a change must come with a new [`SCHEME_VERSION`].

/// Version of the leaf/pair hashing scheme.
///
/// Version 1:
/// - hash function: SHA-256
/// - leaf: `SHA256(LEAF_PREFIX || identity)`
/// - internal node: `SHA256(INTERNAL_PREFIX || min(a, b) || max(a, b))`
/// - odd trailing node: carried up to the next level unchanged
pub const SCHEME_VERSION: u8 = 1;

/// Domain separation prefix for leaf nodes
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain separation prefix for internal nodes
pub const INTERNAL_PREFIX: u8 = 0x01;

/// Size in bytes of every node hash, leaf hash, root and identity.
pub const HASH_LEN: usize = 32;
