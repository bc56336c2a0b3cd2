use crate::{
    error::{ClaimError, ClaimResult},
    payout::Payout,
    receipt::{ClaimReceipt, ClaimedEvent},
    store::ClaimStore,
};
use chrono::Utc;
use distributor_merkle::{hash_identity, to_hex, Hash, Identity, MerkleProof};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

struct LedgerState<S, P> {
    store: S,
    payout: P,
}

/// Single-use claim gate for a committed merkle root.
///
/// The root and the per-claim amount are fixed at construction. All claims go
/// through one lock, so for any identity exactly one `claim` call can observe
/// it unclaimed; every other call, concurrent or later, gets `AlreadyClaimed`.
pub struct ClaimLedger<S: ClaimStore, P: Payout> {
    root: Hash,
    amount_per_claim: u64,
    state: Mutex<LedgerState<S, P>>,
}

impl<S: ClaimStore, P: Payout> ClaimLedger<S, P> {
    pub fn new(root: Hash, amount_per_claim: u64, store: S, payout: P) -> Self {
        debug!(
            root = %to_hex(&root),
            amount_per_claim,
            claimed = store.claimed_count(),
            "Initialized claim ledger"
        );

        Self {
            root,
            amount_per_claim,
            state: Mutex::new(LedgerState { store, payout }),
        }
    }

    pub fn root(&self) -> Hash {
        self.root
    }

    pub fn amount_per_claim(&self) -> u64 {
        self.amount_per_claim
    }

    /// Claim the payout for `identity`, proving membership with `proof`.
    ///
    /// Either the claim is recorded and paid, or the ledger is left exactly
    /// as it was and the reason is returned.
    pub fn claim(&self, identity: &Identity, proof: &MerkleProof) -> ClaimResult<ClaimReceipt> {
        let mut state = self.state.lock();

        // 1. Reject identities that already claimed
        if state.store.is_claimed(identity) {
            warn!(identity = %identity, "Rejected claim: already claimed");
            return Err(ClaimError::AlreadyClaimed(*identity));
        }

        // 2. Construct the leaf from the claimant identity
        let leaf = hash_identity(identity);

        // 3. Verify the merkle proof against the committed root
        if !proof.verify(&self.root, &leaf) {
            warn!(identity = %identity, proof_len = proof.len(), "Rejected claim: invalid proof");
            return Err(ClaimError::InvalidProof(*identity));
        }

        // 4. Make sure the payout can be made before anything is recorded
        if let Err(err) = state.payout.ensure_payable(self.amount_per_claim) {
            warn!(identity = %identity, error = %err, "Rejected claim: payout unavailable");
            return Err(err);
        }

        // 5. Record the claim as a single store transaction
        let receipt = ClaimReceipt {
            identity: *identity,
            amount: self.amount_per_claim,
            claimed_at: Utc::now(),
        };
        if let Err(err) = state.store.commit(receipt.clone()) {
            warn!(identity = %identity, error = %err, "Rejected claim: could not record");
            return Err(err);
        }

        // 6. Pay out
        state.payout.pay(&ClaimedEvent::from(&receipt));
        info!(identity = %identity, amount = receipt.amount, "Claim settled");

        Ok(receipt)
    }

    /// Raw-bytes entry point to [`ClaimLedger::claim`].
    ///
    /// `identity` and every proof element must be exactly 32 bytes, otherwise
    /// the call fails with `MalformedInput` before the ledger is consulted.
    pub fn claim_bytes<B: AsRef<[u8]>>(
        &self,
        identity: &[u8],
        proof: &[B],
    ) -> ClaimResult<ClaimReceipt> {
        let identity = Identity::from_slice(identity)?;
        let proof = MerkleProof::from_slices(proof)?;
        self.claim(&identity, &proof)
    }

    pub fn is_claimed(&self, identity: &Identity) -> bool {
        self.state.lock().store.is_claimed(identity)
    }

    pub fn receipt(&self, identity: &Identity) -> Option<ClaimReceipt> {
        self.state.lock().store.receipt(identity)
    }

    pub fn claimed_count(&self) -> usize {
        self.state.lock().store.claimed_count()
    }

    /// Run `f` with shared access to the payout sink.
    pub fn with_payout<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        f(&self.state.lock().payout)
    }

    pub fn into_parts(self) -> (S, P) {
        let state = self.state.into_inner();
        (state.store, state.payout)
    }
}
