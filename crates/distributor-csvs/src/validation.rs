/*!
# CSV Validation & I/O

Readers validate headers and contents so that `compile` never builds a tree
from a malformed eligibility set.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{
        parse_proof_cell, EligibilityRow, ProofRow, ELIGIBILITY_CSV_HEADERS, PROOFS_CSV_HEADERS,
    },
};
use csv::{Reader, StringRecord, Writer};
use distributor_merkle::{parse_hash, Identity};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read and validate an eligibility CSV file.
///
/// Returns identities in file order. Fails on a bad header, an unparseable
/// identity, a repeated identity or an empty file.
pub fn read_eligibility_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<Identity>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    // Validate headers
    let headers = rdr.headers()?;
    validate_headers(headers.iter(), ELIGIBILITY_CSV_HEADERS, "eligibility.csv")?;

    let mut identities = Vec::new();
    let mut seen = HashSet::new();

    for result in rdr.records() {
        let record = result?;
        let line = record_line(&record);
        let identity = parse_identity_field(&record, 0, line)?;

        if !seen.insert(identity) {
            return Err(CsvError::DuplicateIdentity {
                line,
                identity: identity.to_string(),
            });
        }
        identities.push(identity);
    }

    if identities.is_empty() {
        return Err(CsvError::SchemaValidation(
            "Eligibility CSV file is empty".to_string(),
        ));
    }

    Ok(identities)
}

/// Read and validate a proofs CSV file.
///
/// Rows must be in index order starting at 0. Unparseable identities, leaves
/// and proof elements are reported with their line number.
pub fn read_proofs_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<ProofRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    // Validate headers
    let headers = rdr.headers()?;
    validate_headers(headers.iter(), PROOFS_CSV_HEADERS, "proofs.csv")?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record_line(&record);

        let raw_index = field(&record, 0);
        let index: usize = raw_index.parse().map_err(|_| {
            CsvError::SchemaValidation(format!(
                "proofs.csv: invalid index '{}' on line {}",
                raw_index, line
            ))
        })?;
        let identity = parse_identity_field(&record, 1, line)?;
        let leaf = parse_hash(field(&record, 2)).map_err(|e| CsvError::InvalidHash {
            line,
            reason: e.to_string(),
        })?;
        let proof = parse_proof_cell(field(&record, 3)).map_err(|e| CsvError::InvalidHash {
            line,
            reason: e.to_string(),
        })?;

        let row = ProofRow {
            index,
            identity,
            leaf,
            proof,
        };
        if row.index != rows.len() {
            return Err(CsvError::SchemaValidation(format!(
                "proofs.csv: expected index {}, found {}",
                rows.len(),
                row.index
            )));
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "Proofs CSV file is empty".to_string(),
        ));
    }

    Ok(rows)
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

fn field(record: &StringRecord, i: usize) -> &str {
    record.get(i).unwrap_or_default().trim()
}

fn parse_identity_field(record: &StringRecord, i: usize, line: u64) -> CsvResult<Identity> {
    Identity::from_str(field(record, i)).map_err(|e| CsvError::InvalidIdentity {
        line,
        reason: e.to_string(),
    })
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write eligibility CSV, one identity per row in leaf order
pub fn write_eligibility_csv<P: AsRef<Path>>(path: P, identities: &[Identity]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // Write data rows (csv crate automatically writes headers)
    for identity in identities {
        wtr.serialize(EligibilityRow {
            identity: *identity,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write proofs CSV
pub fn write_proofs_csv<P: AsRef<Path>>(path: P, rows: &[ProofRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
