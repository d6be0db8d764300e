//! # Domain Types
//!
//! Values handed across the presentation boundary.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │   LedgerEntry   │   │   SaleReceipt   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  item           │   │  receipt_number │       │
//! │  │  price (Money)  │   │  units_sold     │   │  total / change │       │
//! │  │  stock (i64)    │   │                 │   │  completed_at   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An item's identity is its name. There are no surrogate ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A sellable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Unique name, shown to the operator and used as the lookup key.
    pub name: String,

    /// Unit price, never negative.
    pub price: Money,

    /// Units on hand, never negative.
    pub stock: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> Self {
        Item {
            name: name.into(),
            price,
            stock,
        }
    }

    /// Checks if `quantity` units can leave the shelf.
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Ledger Entry
// =============================================================================

/// Cumulative units sold for one item since the session started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LedgerEntry {
    pub item: String,
    pub units_sold: i64,
}

/// Point-in-time copy of the sales ledger, in ledger order.
pub type LedgerSnapshot = Vec<LedgerEntry>;

// =============================================================================
// Sale Receipt
// =============================================================================

/// Outcome of a completed sale.
///
/// `change` is what goes back to the customer. The remaining fields let the
/// caller show and log the sale without re-reading the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleReceipt {
    /// Session-local sequence, starting at 1.
    pub receipt_number: u64,
    pub item: String,
    pub quantity: i64,
    /// Price at the moment of sale.
    pub unit_price: Money,
    pub total: Money,
    pub tendered: Money,
    pub change: Money,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_can_sell() {
        let hat = Item::new("Hat", Money::from_cents(760), 15);
        assert!(hat.can_sell(15));
        assert!(hat.can_sell(1));
        assert!(!hat.can_sell(16));
    }

    #[test]
    fn test_item_serializes_with_cents() {
        let shoes = Item::new("Shoes", Money::from_cents(550), 20);
        let json = serde_json::to_value(&shoes).unwrap();
        assert_eq!(json["name"], "Shoes");
        assert_eq!(json["price"], 550);
        assert_eq!(json["stock"], 20);
    }
}
