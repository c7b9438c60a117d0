//! Transaction journal.
//!
//! Every purchase attempt and change collection is recorded, successful or
//! not, so callers can inspect what the machine did after the fact. The
//! owning machine appends in place; `record` returns a new journal with the
//! entry appended and leaves the original untouched.
//!
//! The journal is unbounded and lives as long as its machine.

use super::money::Money;
use crate::machine::VendingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the caller asked the machine to do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionKind {
    Purchase { product: String, inserted: Money },
    /// `amount` is what left the balance, even if the dispenser jammed.
    CollectChange { amount: Money },
}

/// Record of a single transaction attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    /// `None` when the transaction completed without error.
    pub error: Option<VendingError>,
    /// Balance once the transaction (or its failure) settled.
    pub balance_after: Money,
    pub timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Ordered journal of transaction attempts.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{Money, TransactionJournal, TransactionKind, TransactionRecord};
/// use chrono::Utc;
///
/// let journal = TransactionJournal::new();
/// let journal = journal.record(TransactionRecord {
///     kind: TransactionKind::CollectChange { amount: Money::from_units(3) },
///     error: None,
///     balance_after: Money::ZERO,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(journal.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionJournal {
    records: Vec<TransactionRecord>,
}

impl TransactionJournal {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a transaction in place.
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Record a transaction, returning a new journal.
    pub fn record(&self, record: TransactionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of products handed over without a jam, in order.
    pub fn deliveries(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| record.succeeded())
            .filter_map(|record| match &record.kind {
                TransactionKind::Purchase { product, .. } => Some(product.as_str()),
                TransactionKind::CollectChange { .. } => None,
            })
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter().filter(|record| !record.succeeded())
    }

    /// Time between the first and last recorded transaction.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
