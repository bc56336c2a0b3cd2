/*!
# Distributor Merkle

Membership proofs for a fixed eligibility set.

An eligibility list of [`Identity`] values is hashed into leaves
([`hash_identity`]), the leaves are built into a binary [`MerkleTree`], and
each identity receives a [`MerkleProof`] that re-derives the tree root.
Verification ([`verify_proof`]) is a pure function of `(leaf, proof, root)`
and never needs the tree.

The hashing scheme is pinned in [`constants`]; see
[`constants::SCHEME_VERSION`].

```rust
use distributor_merkle::{hash_identity, Identity, MerkleTree};

let identities: Vec<Identity> = (0..8u8).map(|i| Identity::new([i; 32])).collect();
let leaves = identities.iter().map(hash_identity).collect();
let tree = MerkleTree::from_leaves(leaves)?;

let leaf = hash_identity(&identities[3]);
let proof = tree.proof(&leaf)?;
assert!(proof.verify(&tree.root(), &leaf));
# Ok::<(), distributor_merkle::MerkleError>(())
```
*/

pub mod constants;
pub mod encoding;
pub mod error;
pub mod hasher;
pub mod identity;
pub mod leaf;
pub mod proof;
pub mod tree;

/// A 32-byte node, leaf or root hash.
pub type Hash = [u8; 32];

pub use constants::SCHEME_VERSION;
pub use encoding::{parse_hash, to_hex};
pub use error::{MerkleError, MerkleResult};
pub use hasher::DistributorHasher;
pub use identity::Identity;
pub use leaf::{hash_identities, hash_identity};
pub use proof::{batch_verify_proofs, compute_root, verify_proof, verify_proof_bytes, MerkleProof};
pub use tree::MerkleTree;
