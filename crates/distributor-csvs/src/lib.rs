/*!
# Distribution CSV Schema Definitions

This crate provides the **authoritative CSV schemas** for merkle distributions.

## Purpose

This crate is the **single source of truth** for CSV data contracts between:

- **`generate-fixtures`** (producer) → Creates `eligibility.csv`
- **`compile`** (consumer/producer) → Reads `eligibility.csv`, writes `proofs.csv`

## Schema Files

### Eligibility CSV (`eligibility.csv`)
One column:
- `identity`: claimant identity, 64 hex digits (`0x` prefix accepted)

Row order is the leaf index. Repeated identities and empty files are rejected.

### Proofs CSV (`proofs.csv`)
- `index`: leaf index
- `identity`: claimant identity
- `leaf`: leaf hash (hex)
- `proof`: sibling hashes bottom to top, hex, joined by `:`

## Usage

```rust,no_run
use distributor_csvs::{read_eligibility_csv, CsvResult};

fn example() -> CsvResult<()> {
    let identities = read_eligibility_csv("eligibility.csv")?;
    println!("{} eligible identities", identities.len());
    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use schemas::{
    EligibilityRow, ProofRow, ELIGIBILITY_CSV_HEADERS, PROOFS_CSV_HEADERS, PROOF_ELEMENT_SEPARATOR,
};
pub use validation::{
    read_eligibility_csv, read_proofs_csv, write_eligibility_csv, write_proofs_csv,
};
