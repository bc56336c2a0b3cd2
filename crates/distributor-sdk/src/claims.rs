/*!
# Claims

Runs the claim ledger for a compiled [`Distribution`] against a persisted
claim state file.
*/

use crate::compiler_error::CompilerResult;
use crate::distribution::Distribution;
use distributor_ledger::{ClaimLedger, ClaimReceipt, ClaimStore, JsonFileClaimStore, Treasury};
use distributor_merkle::Identity;
use std::path::Path;
use tracing::debug;

pub type FileLedger = ClaimLedger<JsonFileClaimStore, Treasury>;

/// Where an identity stands in a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityStatus {
    NotEligible,
    Unclaimed { index: usize },
    Claimed { index: usize, receipt: ClaimReceipt },
}

/// Open the ledger for `distribution`, backed by the claim state at
/// `state_path`.
///
/// The treasury starts at the distribution funding minus everything already
/// paid out in the state file. The state must belong to the distribution's
/// root, and stays locked until the ledger is dropped.
pub fn open_ledger(distribution: &Distribution, state_path: &Path) -> CompilerResult<FileLedger> {
    let store = JsonFileClaimStore::open(state_path, &distribution.root)?;
    let paid = distribution
        .amount_per_claim
        .saturating_mul(store.claimed_count() as u64);
    let balance = distribution.funding.saturating_sub(paid);

    debug!(
        root = %distribution.root_hex(),
        claimed = store.claimed_count(),
        balance,
        "Opening ledger"
    );

    Ok(ClaimLedger::new(
        distribution.root,
        distribution.amount_per_claim,
        store,
        Treasury::new(balance),
    ))
}

/// Membership plus claimed status, read without touching the ledger.
pub fn check_eligibility<S: ClaimStore>(
    distribution: &Distribution,
    store: &S,
    identity: &Identity,
) -> EligibilityStatus {
    let Some(entry) = distribution.entry_for(identity) else {
        return EligibilityStatus::NotEligible;
    };

    match store.receipt(identity) {
        Some(receipt) => EligibilityStatus::Claimed {
            index: entry.index,
            receipt,
        },
        None => EligibilityStatus::Unclaimed { index: entry.index },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler_error::CompilerError;
    use crate::distribution_compiler::compile_distribution;
    use chrono::Utc;
    use distributor_ledger::{ClaimError, MemoryClaimStore};
    use tempfile::TempDir;

    fn identities(count: u8) -> Vec<Identity> {
        (1..=count).map(|i| Identity::new([i; 32])).collect()
    }

    fn sample() -> Distribution {
        compile_distribution("claims", &identities(4), 100, 400).unwrap()
    }

    #[test]
    fn test_open_ledger_restores_balance() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("claims.json");
        let distribution = sample();
        let first = distribution.claims[0].clone();

        {
            let ledger = open_ledger(&distribution, &state).unwrap();
            ledger.claim(&first.identity, &first.proof).unwrap();
            assert_eq!(ledger.with_payout(|t| t.balance()), 300);
        }

        let ledger = open_ledger(&distribution, &state).unwrap();
        assert_eq!(ledger.with_payout(|t| t.balance()), 300);
        assert!(matches!(
            ledger.claim(&first.identity, &first.proof),
            Err(ClaimError::AlreadyClaimed(_))
        ));
    }

    #[test]
    fn test_open_ledger_rejects_state_of_another_root() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("claims.json");
        let original = sample();
        let first = original.claims[0].clone();
        {
            let ledger = open_ledger(&original, &state).unwrap();
            ledger.claim(&first.identity, &first.proof).unwrap();
        }

        // Same file, distribution rebuilt with one more identity
        let extended = compile_distribution("claims", &identities(5), 100, 500).unwrap();
        assert_ne!(extended.root, original.root);
        assert!(matches!(
            open_ledger(&extended, &state),
            Err(CompilerError::Claim(ClaimError::Storage(_)))
        ));

        let ledger = open_ledger(&original, &state).unwrap();
        assert!(ledger.is_claimed(&first.identity));
    }

    #[test]
    fn test_open_ledger_holds_the_state_exclusively() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("claims.json");
        let distribution = sample();

        let ledger = open_ledger(&distribution, &state).unwrap();
        assert!(matches!(
            open_ledger(&distribution, &state),
            Err(CompilerError::Claim(ClaimError::Storage(_)))
        ));

        let entry = &distribution.claims[1];
        ledger.claim(&entry.identity, &entry.proof).unwrap();
        drop(ledger);

        let reopened = open_ledger(&distribution, &state).unwrap();
        assert_eq!(reopened.claimed_count(), 1);
        assert_eq!(reopened.with_payout(|t| t.balance()), 300);
    }

    #[test]
    fn test_check_eligibility() {
        let distribution = sample();
        let mut store = MemoryClaimStore::new();
        let member = distribution.claims[2].identity;

        assert_eq!(
            check_eligibility(&distribution, &store, &member),
            EligibilityStatus::Unclaimed { index: 2 }
        );
        assert_eq!(
            check_eligibility(&distribution, &store, &Identity::new([77u8; 32])),
            EligibilityStatus::NotEligible
        );

        let receipt = ClaimReceipt {
            identity: member,
            amount: 100,
            claimed_at: Utc::now(),
        };
        store.commit(receipt.clone()).unwrap();
        assert_eq!(
            check_eligibility(&distribution, &store, &member),
            EligibilityStatus::Claimed { index: 2, receipt }
        );
    }
}
