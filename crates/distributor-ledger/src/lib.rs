/*!
# Distributor Ledger

Single-use claim gate for a merkle distribution.

A [`ClaimLedger`] is bound to one committed root and a flat amount per
claim. `claim(identity, proof)` recomputes the identity's leaf, verifies the
proof against the root, and only then records the claim in a [`ClaimStore`]
and pays out through a [`Payout`] sink. Any rejection leaves both untouched.
*/

pub mod error;
pub mod ledger;
pub mod payout;
pub mod receipt;
pub mod store;

pub use error::{ClaimError, ClaimResult};
pub use ledger::ClaimLedger;
pub use payout::{Payout, Treasury};
pub use receipt::{ClaimReceipt, ClaimedEvent};
pub use store::{ClaimStore, JsonFileClaimStore, MemoryClaimStore, CLAIM_STATE_VERSION};
