use crate::{
    error::{ClaimError, ClaimResult},
    receipt::ClaimedEvent,
};
use tracing::debug;

/// Side effect triggered by a successful claim.
///
/// The ledger calls [`Payout::ensure_payable`] before it records a claim and
/// [`Payout::pay`] right after, both while holding the ledger lock, so `pay`
/// must not fail once `ensure_payable` has accepted the amount.
pub trait Payout: Send {
    fn ensure_payable(&self, amount: u64) -> ClaimResult<()>;

    fn pay(&mut self, event: &ClaimedEvent);
}

/// Funded payout balance that pays a flat amount per claim and keeps the
/// emitted events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Treasury {
    balance: u64,
    events: Vec<ClaimedEvent>,
}

impl Treasury {
    pub fn new(balance: u64) -> Self {
        Self {
            balance,
            events: Vec::new(),
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Events emitted so far, in claim order.
    pub fn events(&self) -> &[ClaimedEvent] {
        &self.events
    }

    /// Total amount paid out through this treasury.
    pub fn total_paid(&self) -> u64 {
        self.events.iter().map(|e| e.amount).sum()
    }
}

impl Payout for Treasury {
    fn ensure_payable(&self, amount: u64) -> ClaimResult<()> {
        if amount > self.balance {
            return Err(ClaimError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    fn pay(&mut self, event: &ClaimedEvent) {
        self.balance = self.balance.saturating_sub(event.amount);
        self.events.push(*event);

        debug!(
            identity = %event.identity,
            amount = event.amount,
            remaining = self.balance,
            "Treasury paid out"
        );
    }
}
