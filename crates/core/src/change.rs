//! Change records produced by mutating stock operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::name::ItemName;

/// Record of a single applied stock mutation.
///
/// Returned by every mutating operation so callers can build their own audit
/// trail instead of sharing a mutable log buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    pub item: ItemName,
    /// Signed quantity applied: positive for additions, negative for removals.
    pub delta: i64,
    /// Quantity left after the change; `None` when the entry was deleted.
    pub remaining: Option<i64>,
    pub occurred_at: DateTime<Utc>,
}

impl StockChange {
    pub fn new(item: ItemName, delta: i64, remaining: Option<i64>) -> Self {
        Self {
            item,
            delta,
            remaining,
            occurred_at: Utc::now(),
        }
    }

    /// Whether the change removed the item from stock entirely.
    pub fn deleted_entry(&self) -> bool {
        self.remaining.is_none()
    }
}
