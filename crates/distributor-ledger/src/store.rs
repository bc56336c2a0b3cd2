use crate::{
    error::{ClaimError, ClaimResult},
    receipt::ClaimReceipt,
};
use distributor_merkle::{encoding::hex_hash, to_hex, Hash, Identity, SCHEME_VERSION};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Key-value store of claim receipts, keyed by identity.
///
/// A store never decides whether a claim is valid; [`crate::ClaimLedger`]
/// does that and calls [`ClaimStore::commit`] with exclusive access.
pub trait ClaimStore: Send {
    fn receipt(&self, identity: &Identity) -> Option<ClaimReceipt>;

    fn is_claimed(&self, identity: &Identity) -> bool {
        self.receipt(identity).is_some()
    }

    fn claimed_count(&self) -> usize;

    /// Record `receipt` as one transactional write.
    ///
    /// Fails with `AlreadyClaimed` if a receipt for the identity exists. On
    /// any error the store is unchanged.
    fn commit(&mut self, receipt: ClaimReceipt) -> ClaimResult<()>;
}

// ================================================================================================
// In-memory store
// ================================================================================================

#[derive(Debug, Default)]
pub struct MemoryClaimStore {
    receipts: HashMap<Identity, ClaimReceipt>,
}

impl MemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClaimStore for MemoryClaimStore {
    fn receipt(&self, identity: &Identity) -> Option<ClaimReceipt> {
        self.receipts.get(identity).cloned()
    }

    fn claimed_count(&self) -> usize {
        self.receipts.len()
    }

    fn commit(&mut self, receipt: ClaimReceipt) -> ClaimResult<()> {
        if self.receipts.contains_key(&receipt.identity) {
            return Err(ClaimError::AlreadyClaimed(receipt.identity));
        }
        self.receipts.insert(receipt.identity, receipt);
        Ok(())
    }
}

// ================================================================================================
// JSON file store
// ================================================================================================

/// Current version of the claim state file layout
pub const CLAIM_STATE_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize)]
struct ClaimStateFile {
    version: u32,
    /// Hashing scheme of the root below
    scheme_version: u8,
    /// Root every receipt in this file was verified against
    #[serde(with = "hex_hash")]
    root: Hash,
    receipts: Vec<ClaimReceipt>,
}

/// Claim store persisted as a JSON snapshot, bound to one merkle root.
///
/// Every commit rewrites the whole snapshot into a temp file in the same
/// directory and renames it over the previous one, so the file on disk is
/// always a complete snapshot. An exclusive OS lock on `<path>.lock` is held
/// for the lifetime of the store; a second store on the same path, in this
/// process or another, fails to open until the first is dropped.
#[derive(Debug)]
pub struct JsonFileClaimStore {
    path: PathBuf,
    root: Hash,
    receipts: BTreeMap<Identity, ClaimReceipt>,
    _lock: File,
}

impl JsonFileClaimStore {
    /// Open the store at `path` for claims against `root`, starting empty if
    /// the file does not exist.
    ///
    /// Fails with `Storage` if another store holds the lock, or if the file
    /// was written for a different root or hashing scheme.
    pub fn open<P: AsRef<Path>>(path: P, root: &Hash) -> ClaimResult<Self> {
        let path = path.as_ref().to_path_buf();
        let lock = acquire_lock(&path)?;

        let receipts = if path.exists() {
            let file = File::open(&path).map_err(storage_error)?;
            let state: ClaimStateFile =
                serde_json::from_reader(BufReader::new(file)).map_err(storage_error)?;

            if state.version != CLAIM_STATE_VERSION {
                return Err(ClaimError::Storage(format!(
                    "claim state version mismatch: expected {}, found {}",
                    CLAIM_STATE_VERSION, state.version
                )));
            }
            if state.scheme_version != SCHEME_VERSION {
                return Err(ClaimError::Storage(format!(
                    "claim state scheme mismatch: expected {}, found {}",
                    SCHEME_VERSION, state.scheme_version
                )));
            }
            if state.root != *root {
                return Err(ClaimError::Storage(format!(
                    "claim state {} belongs to root {}, not {}",
                    path.display(),
                    to_hex(&state.root),
                    to_hex(root)
                )));
            }

            let mut receipts = BTreeMap::new();
            for receipt in state.receipts {
                if receipts.insert(receipt.identity, receipt).is_some() {
                    return Err(ClaimError::Storage(format!(
                        "claim state {} lists an identity twice",
                        path.display()
                    )));
                }
            }
            receipts
        } else {
            BTreeMap::new()
        };

        debug!(
            path = %path.display(),
            root = %to_hex(root),
            claimed = receipts.len(),
            "Opened claim store"
        );

        Ok(Self {
            path,
            root: *root,
            receipts,
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> Hash {
        self.root
    }

    fn write_snapshot(&self) -> ClaimResult<()> {
        let state = ClaimStateFile {
            version: CLAIM_STATE_VERSION,
            scheme_version: SCHEME_VERSION,
            root: self.root,
            receipts: self.receipts.values().cloned().collect(),
        };

        let mut tmp = NamedTempFile::new_in(parent_dir(&self.path)).map_err(storage_error)?;
        serde_json::to_writer_pretty(&mut tmp, &state).map_err(storage_error)?;
        tmp.flush().map_err(storage_error)?;
        tmp.as_file().sync_all().map_err(storage_error)?;
        tmp.persist(&self.path)
            .map_err(|e| storage_error(e.error))?;

        Ok(())
    }
}

impl ClaimStore for JsonFileClaimStore {
    fn receipt(&self, identity: &Identity) -> Option<ClaimReceipt> {
        self.receipts.get(identity).cloned()
    }

    fn claimed_count(&self) -> usize {
        self.receipts.len()
    }

    fn commit(&mut self, receipt: ClaimReceipt) -> ClaimResult<()> {
        let identity = receipt.identity;
        if self.receipts.contains_key(&identity) {
            return Err(ClaimError::AlreadyClaimed(identity));
        }

        self.receipts.insert(identity, receipt);
        if let Err(err) = self.write_snapshot() {
            self.receipts.remove(&identity);
            return Err(err);
        }

        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Take the exclusive lock guarding the claim state at `path`.
fn acquire_lock(path: &Path) -> ClaimResult<File> {
    let mut lock_name = path.file_name().unwrap_or_default().to_os_string();
    lock_name.push(".lock");
    let lock_path = parent_dir(path).join(lock_name);

    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&lock_path)
        .map_err(storage_error)?;

    lock.try_lock_exclusive().map_err(|e| {
        ClaimError::Storage(format!(
            "claim state {} is locked by another store: {}",
            path.display(),
            e
        ))
    })?;

    Ok(lock)
}

fn storage_error<E: std::fmt::Display>(err: E) -> ClaimError {
    ClaimError::Storage(err.to_string())
}
