use chrono::{DateTime, Utc};
use distributor_merkle::Identity;
use serde::{Deserialize, Serialize};

/// Record of a settled claim. Its presence in a claim store is the claimed
/// flag for `identity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// The claimant who was paid.
    pub identity: Identity,

    /// Amount paid out for this claim.
    pub amount: u64,

    /// When the claim was recorded.
    pub claimed_at: DateTime<Utc>,
}

/// Emitted through the payout sink once per successful claim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimedEvent {
    pub identity: Identity,
    pub amount: u64,
}

impl From<&ClaimReceipt> for ClaimedEvent {
    fn from(receipt: &ClaimReceipt) -> Self {
        Self {
            identity: receipt.identity,
            amount: receipt.amount,
        }
    }
}
