/*!
# Distributor SDK

Off-line and operator tooling for merkle distributions:

- [`compile_distribution`] builds the tree for an eligibility set once and
  emits a [`Distribution`] holding the root and every identity's proof.
- [`Distribution::save`] / [`Distribution::load`] persist that artifact as
  JSON; loading re-validates every proof against the root.
- [`open_ledger`] runs the claim ledger for a distribution over a persisted
  claim state file.
*/

mod claims;
mod compiler_error;
mod distribution;
mod distribution_compiler;

pub use claims::{check_eligibility, open_ledger, EligibilityStatus, FileLedger};
pub use compiler_error::{CompilerError, CompilerResult};
pub use distribution::{ClaimEntry, Distribution};
pub use distribution_compiler::{compile_distribution, compile_distribution_from_csv};
