use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Ledger;

/// The single I/O boundary: the whole ledger lives in one JSON file and is
/// always read and written in full.
pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    pub(crate) fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read the ledger. A missing or unparseable file fails open to an
    /// empty ledger; corruption is never surfaced to the caller. Legacy
    /// blobs are normalized to the canonical schema on the way in.
    pub(crate) fn load(&self) -> Ledger {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Ledger::default();
        };
        let mut ledger: Ledger = serde_json::from_str(&raw).unwrap_or_default();
        ledger.normalize();
        ledger
    }

    /// Serialize the full ledger and overwrite the stored blob. Last write
    /// wins; there are no partial updates.
    pub(crate) fn save(&self, ledger: &Ledger) -> Result<()> {
        let raw = serde_json::to_string(ledger).context("Failed to serialize ledger")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write ledger: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
