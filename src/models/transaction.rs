use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TransactionKind;
use crate::types::Amount;

/// A single entry in an account's history.
///
/// The amount is always a positive magnitude; whether money moved in or out
/// is implied by the kind and by which side of a transfer the entry sits on.
/// Entries are never edited once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the operation was recorded.
    pub timestamp: DateTime<Utc>,
    pub amount: Amount,
    pub kind: TransactionKind
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Amount, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, amount, kind }
    }

    pub fn now(kind: TransactionKind, amount: Amount) -> Self {
        Self::new(kind, amount, Utc::now())
    }
}
