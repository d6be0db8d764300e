//! # Inventory Manager
//!
//! Operator-facing catalog maintenance: add an item, change a price,
//! restock.
//!
//! ## Inventory Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_item(name, price, stock)                                           │
//! │    name trimmed, non-empty; price ≥ 0; stock ≥ 0                        │
//! │    an existing item with the same name is overwritten                   │
//! │                                                                         │
//! │  edit_price(name, price)                                                │
//! │    item must exist; price ≥ 0                                           │
//! │                                                                         │
//! │  restock(name, units)                                                   │
//! │    item must exist; units ≥ 1; stock += units                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Item;
use crate::validation::validate_restock_units;

/// Catalog maintenance. Obtained from [`crate::Session::inventory`].
#[derive(Debug)]
pub struct InventoryManager<'a> {
    catalog: &'a mut Catalog,
}

impl<'a> InventoryManager<'a> {
    pub fn new(catalog: &'a mut Catalog) -> Self {
        InventoryManager { catalog }
    }

    /// Adds an item, or silently replaces the price and stock of an item
    /// that already has this name.
    ///
    /// ## Returns
    /// The item as stored.
    pub fn add_item(&mut self, name: &str, price: Money, stock: i64) -> CoreResult<Item> {
        self.catalog.put(name, price, stock).cloned()
    }

    /// Changes the unit price of an existing item.
    pub fn edit_price(&mut self, name: &str, new_price: Money) -> CoreResult<Item> {
        self.catalog.set_price(name, new_price)?;
        self.catalog.get(name).cloned()
    }

    /// Adds `additional_units` to an existing item's stock.
    ///
    /// ## Errors
    /// `InvalidArgument` if fewer than one unit is given, `ItemNotFound` if
    /// the item does not exist.
    pub fn restock(&mut self, name: &str, additional_units: i64) -> CoreResult<Item> {
        validate_restock_units(additional_units)?;
        self.catalog.adjust_stock(name, additional_units)?;
        self.catalog.get(name).cloned()
    }
}
