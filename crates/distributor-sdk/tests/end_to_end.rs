use distributor_csvs::{read_proofs_csv, write_eligibility_csv, write_proofs_csv};
use distributor_ledger::{ClaimError, ClaimStore, JsonFileClaimStore};
use distributor_merkle::{hash_identity, verify_proof, Identity};
use distributor_sdk::{
    check_eligibility, compile_distribution_from_csv, open_ledger, Distribution,
    EligibilityStatus,
};
use tempfile::TempDir;

#[test]
fn test_csv_to_claims() {
    let dir = TempDir::new().unwrap();
    let eligibility = dir.path().join("eligibility.csv");
    let artifact = dir.path().join("distribution.json");
    let proofs = dir.path().join("proofs.csv");
    let state = dir.path().join("claims.json");

    let identities: Vec<Identity> = (1..=8u8).map(|i| Identity::new([i; 32])).collect();
    write_eligibility_csv(&eligibility, &identities).unwrap();

    // Off-line: compile once, persist the artifact and per-identity proofs
    let compiled = compile_distribution_from_csv("e2e", &eligibility, 250, 2_000).unwrap();
    compiled.save(&artifact).unwrap();
    write_proofs_csv(&proofs, &compiled.proof_rows()).unwrap();

    // A claimant only needs their proof row and the committed root
    let distribution = Distribution::load(&artifact).unwrap();
    let rows = read_proofs_csv(&proofs).unwrap();
    for row in &rows {
        assert!(verify_proof(
            &hash_identity(&row.identity),
            &row.proof,
            &distribution.root
        ));
    }

    // On-line: claims against the persisted state
    let ledger = open_ledger(&distribution, &state).unwrap();
    let a1 = &distribution.claims[0];
    let receipt = ledger.claim(&a1.identity, &a1.proof).unwrap();
    assert_eq!(receipt.amount, 250);

    assert!(matches!(
        ledger.claim(&a1.identity, &a1.proof),
        Err(ClaimError::AlreadyClaimed(_))
    ));

    let a2 = &distribution.claims[1];
    assert!(matches!(
        ledger.claim(&a2.identity, &a1.proof),
        Err(ClaimError::InvalidProof(_))
    ));
    drop(ledger);

    let store = JsonFileClaimStore::open(&state, &distribution.root).unwrap();
    assert_eq!(store.claimed_count(), 1);
    assert!(matches!(
        check_eligibility(&distribution, &store, &a1.identity),
        EligibilityStatus::Claimed { index: 0, .. }
    ));
    assert_eq!(
        check_eligibility(&distribution, &store, &a2.identity),
        EligibilityStatus::Unclaimed { index: 1 }
    );
}

#[test]
fn test_underfunded_distribution_stops_paying() {
    let dir = TempDir::new().unwrap();
    let eligibility = dir.path().join("eligibility.csv");
    let state = dir.path().join("claims.json");

    let identities: Vec<Identity> = (1..=3u8).map(|i| Identity::new([i; 32])).collect();
    write_eligibility_csv(&eligibility, &identities).unwrap();

    // Funded for two of three claims
    let distribution = compile_distribution_from_csv("short", &eligibility, 100, 200).unwrap();
    let ledger = open_ledger(&distribution, &state).unwrap();

    for entry in &distribution.claims[..2] {
        ledger.claim(&entry.identity, &entry.proof).unwrap();
    }
    let last = &distribution.claims[2];
    assert_eq!(
        ledger.claim(&last.identity, &last.proof),
        Err(ClaimError::InsufficientFunds {
            required: 100,
            available: 0
        })
    );
    assert!(!ledger.is_claimed(&last.identity));
}
