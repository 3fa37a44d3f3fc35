//! Serializable ledger snapshot
//!
//! The engine keeps everything in memory. A snapshot is the hand-off format
//! for whoever wants the ledger to outlive the session: the caller decides
//! where (and whether) to write it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::categories::CategoryRegistry;
use crate::config::LedgerConfig;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::Expense;
use crate::store::ExpenseStore;

/// Snapshot metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Application version that created the snapshot
    pub version: String,
    /// When the snapshot was taken
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub metadata: SnapshotMetadata,
    pub categories: Vec<String>,
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Ledger {
    /// Capture categories and expenses
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            metadata: SnapshotMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: Utc::now().to_rfc3339(),
            },
            categories: self.categories().to_vec(),
            expenses: self.expenses().to_vec(),
        }
    }

    /// Restore a ledger from a snapshot.
    ///
    /// Ids are kept and new ids continue above the largest restored one.
    /// An empty category list restores as the fallback category alone.
    /// Repeated ids and out-of-range amounts are rejected.
    pub fn from_snapshot(snapshot: Snapshot, config: LedgerConfig) -> Result<Self> {
        debug!(
            version = %snapshot.metadata.version,
            categories = snapshot.categories.len(),
            expenses = snapshot.expenses.len(),
            "Restoring ledger snapshot"
        );
        let expenses = ExpenseStore::from_records(snapshot.expenses)?;
        Ok(Ledger::from_parts(
            CategoryRegistry::new(snapshot.categories),
            expenses,
            config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{ExpenseDraft, ExpenseId};

    #[test]
    fn test_snapshot_restore() {
        let mut ledger = Ledger::with_sample_data(LedgerConfig::default()).unwrap();
        ledger.add_category("Travel").unwrap();
        ledger.remove_category("Bills").unwrap();

        let json = ledger.snapshot().to_json().unwrap();
        let restored =
            Ledger::from_snapshot(Snapshot::from_json(&json).unwrap(), LedgerConfig::default())
                .unwrap();

        assert_eq!(restored.categories(), ledger.categories());
        assert_eq!(restored.expenses(), ledger.expenses());
    }

    #[test]
    fn test_restored_ledger_continues_ids() {
        let ledger = Ledger::with_sample_data(LedgerConfig::default()).unwrap();
        let max_id = ledger.expenses().iter().map(|e| e.id).max().unwrap();

        let mut restored =
            Ledger::from_snapshot(ledger.snapshot(), LedgerConfig::default()).unwrap();
        let added = restored
            .add_expense(&ExpenseDraft::new("1", "New", "Food", "2024-09-01"))
            .unwrap();
        assert!(added.id > max_id);
    }

    #[test]
    fn test_snapshot_metadata() {
        let snapshot = Ledger::default().snapshot();
        assert_eq!(snapshot.metadata.version, env!("CARGO_PKG_VERSION"));
        assert!(snapshot.expenses.is_empty());
        assert_eq!(snapshot.categories.len(), 7);
    }

    #[test]
    fn test_restore_rejects_duplicate_ids() {
        let ledger = Ledger::with_sample_data(LedgerConfig::default()).unwrap();
        let mut snapshot = ledger.snapshot();
        let id = snapshot.expenses[0].id;
        snapshot.expenses[1].id = id;

        let result = Ledger::from_snapshot(snapshot, LedgerConfig::default());
        assert!(matches!(result, Err(Error::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_exhausted_ids() {
        let ledger = Ledger::with_sample_data(LedgerConfig::default()).unwrap();
        let mut snapshot = ledger.snapshot();
        snapshot.expenses[0].id = ExpenseId(u64::MAX);

        let result = Ledger::from_snapshot(snapshot, LedgerConfig::default());
        assert!(matches!(result, Err(Error::IdsExhausted)));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Snapshot::from_json("{not json").is_err());
    }
}
