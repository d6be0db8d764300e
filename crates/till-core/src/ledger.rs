//! # Sales Ledger
//!
//! Units sold per item since the session started. Entries appear the first
//! time an item is sold and only ever grow.

use crate::error::CoreResult;
use crate::types::{LedgerEntry, LedgerSnapshot};
use crate::validation::validate_quantity;

/// Per-item units-sold counters, in first-sale order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesLedger {
    entries: Vec<LedgerEntry>,
}

impl SalesLedger {
    pub fn new() -> Self {
        SalesLedger {
            entries: Vec::new(),
        }
    }

    /// Adds `qty` units to the counter for `name`, creating it at zero if
    /// this is the item's first sale.
    ///
    /// ## Returns
    /// The item's new cumulative total.
    ///
    /// ## Errors
    /// `InvalidArgument` if `qty` ≤ 0.
    pub fn record_sale(&mut self, name: &str, qty: i64) -> CoreResult<i64> {
        validate_quantity(qty)?;

        let entry = match self.entries.iter().position(|e| e.item == name) {
            Some(index) => &mut self.entries[index],
            None => {
                self.entries.push(LedgerEntry {
                    item: name.to_string(),
                    units_sold: 0,
                });
                let last = self.entries.len() - 1;
                &mut self.entries[last]
            }
        };

        entry.units_sold += qty;
        Ok(entry.units_sold)
    }

    /// Units sold for `name`; zero if it has never been sold.
    pub fn units_sold(&self, name: &str) -> i64 {
        self.entries
            .iter()
            .find(|e| e.item == name)
            .map_or(0, |e| e.units_sold)
    }

    /// Entries in first-sale order.
    pub fn list(&self) -> impl Iterator<Item = &LedgerEntry> + '_ {
        self.entries.iter()
    }

    /// Copies the ledger for export.
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sale_creates_and_accumulates() {
        let mut ledger = SalesLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.units_sold("Shoes"), 0);

        assert_eq!(ledger.record_sale("Shoes", 3).unwrap(), 3);
        assert_eq!(ledger.record_sale("Hat", 1).unwrap(), 1);
        assert_eq!(ledger.record_sale("Shoes", 2).unwrap(), 5);

        let rows: Vec<(&str, i64)> = ledger
            .list()
            .map(|e| (e.item.as_str(), e.units_sold))
            .collect();
        assert_eq!(rows, vec![("Shoes", 5), ("Hat", 1)]);
    }

    #[test]
    fn test_record_sale_rejects_non_positive() {
        let mut ledger = SalesLedger::new();
        assert!(ledger.record_sale("Shoes", 0).unwrap_err().is_invalid_argument());
        assert!(ledger.record_sale("Shoes", -4).unwrap_err().is_invalid_argument());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut ledger = SalesLedger::new();
        ledger.record_sale("Socks", 4).unwrap();
        let snapshot = ledger.snapshot();

        ledger.record_sale("Socks", 1).unwrap();
        assert_eq!(snapshot[0].units_sold, 4);
        assert_eq!(ledger.units_sold("Socks"), 5);
    }
}
