use std::collections::BTreeMap;
use std::fmt::Write as _;

use stockroom_core::{DomainError, DomainResult, ItemName, StockChange};

/// In-memory stock mapping: item name to quantity on hand.
///
/// A plain owned value; the caller decides its lifetime and sharing. Every
/// operation is a single step against the map, and every mutation is reported
/// back as a [`StockChange`] as well as logged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    items: BTreeMap<ItemName, i64>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` of `item` to stock, creating the entry at 0 first if absent.
    ///
    /// Quantities accumulate additively across calls. The delta is applied
    /// unconditionally; a zero or negative `qty` is accepted and simply
    /// shifts the stored quantity.
    pub fn add(&mut self, item: &ItemName, qty: i64) -> StockChange {
        let entry = self.items.entry(item.clone()).or_insert(0);
        *entry += qty;
        let remaining = *entry;
        tracing::info!(item = %item, qty, remaining, "added stock");
        StockChange::new(item.clone(), qty, Some(remaining))
    }

    /// Remove `qty` of `item` from stock.
    ///
    /// The quantity is subtracted unconditionally; if the result is zero or
    /// below, the entry is deleted outright. Removing more than is on hand
    /// is therefore not an error: the item just disappears from stock. Only
    /// removing an item that was never stocked fails.
    pub fn remove(&mut self, item: &ItemName, qty: i64) -> DomainResult<StockChange> {
        let Some(current) = self.items.get_mut(item) else {
            tracing::warn!(item = %item, "attempt to remove non-existing item");
            return Err(DomainError::not_found(item.as_str()));
        };

        *current -= qty;
        let remaining = *current;
        if remaining <= 0 {
            self.items.remove(item);
            tracing::info!(item = %item, qty, "removed stock, entry deleted");
            return Ok(StockChange::new(item.clone(), -qty, None));
        }

        tracing::info!(item = %item, qty, remaining, "removed stock");
        Ok(StockChange::new(item.clone(), -qty, Some(remaining)))
    }

    /// Quantity on hand for `item`, 0 if absent.
    pub fn get_qty(&self, item: &ItemName) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Items with quantity strictly below `threshold`, in map order.
    ///
    /// An item sitting exactly at the threshold is not low.
    pub fn check_low(&self, threshold: i64) -> Vec<ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Replace the entire contents of the store.
    ///
    /// Used by snapshot loading; prior entries are discarded, never merged.
    pub fn replace(&mut self, items: BTreeMap<ItemName, i64>) {
        self.items = items;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> {
        self.items.iter().map(|(item, qty)| (item, *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the stock report: a header line followed by one
    /// `name -> quantity` line per item.
    pub fn render_report(&self) -> String {
        let mut report = String::from("Items Report\n");
        for (item, qty) in &self.items {
            let _ = writeln!(report, "{item} -> {qty}");
        }
        report
    }
}
