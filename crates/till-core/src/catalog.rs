//! # Catalog
//!
//! The set of sellable items, keyed by name, in insertion order.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog                                         │
//! │                                                                         │
//! │  get(name)                ──► &Item | ItemNotFound                      │
//! │  put(name, price, stock)  ──► insert, or overwrite in place             │
//! │  adjust_stock(name, Δ)    ──► ItemNotFound | NegativeStock | new stock  │
//! │  set_price(name, price)   ──► ItemNotFound | InvalidArgument            │
//! │  list()                   ──► items in insertion order                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalogs hold a handful of items, so lookups are linear scans over a
//! `Vec`. That keeps the rendering order identical to the order items were
//! added, including after an overwrite.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Item;
use crate::validation::{validate_item_name, validate_price, validate_stock};

/// Item catalog.
///
/// ## Invariants
/// - Names are unique
/// - Every price ≥ 0 and every stock ≥ 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Builds a catalog from known-good items, in order.
    pub(crate) fn from_seed(items: impl IntoIterator<Item = Item>) -> Self {
        Catalog {
            items: items.into_iter().collect(),
        }
    }

    /// Looks up an item by its exact name.
    pub fn get(&self, name: &str) -> CoreResult<&Item> {
        self.items
            .iter()
            .find(|i| i.name == name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
    }

    /// Inserts a new item or overwrites an existing one.
    ///
    /// The name is trimmed before it is stored. Overwriting replaces both
    /// price and stock and keeps the item's position.
    ///
    /// ## Errors
    /// `InvalidArgument` (as [`CoreError::Validation`]) for an empty name,
    /// a negative price or a negative stock. The catalog is unchanged.
    pub fn put(&mut self, name: &str, price: Money, stock: i64) -> CoreResult<&Item> {
        let name = validate_item_name(name)?;
        validate_price(price)?;
        validate_stock(stock)?;

        let index = match self.position(name) {
            Some(index) => {
                let item = &mut self.items[index];
                item.price = price;
                item.stock = stock;
                index
            }
            None => {
                self.items.push(Item::new(name, price, stock));
                self.items.len() - 1
            }
        };

        Ok(&self.items[index])
    }

    /// Adds `delta` (positive or negative) to an item's stock.
    ///
    /// ## Returns
    /// The new stock level.
    ///
    /// ## Errors
    /// - `ItemNotFound` if the name is absent
    /// - `NegativeStock` if the result would be below zero
    pub fn adjust_stock(&mut self, name: &str, delta: i64) -> CoreResult<i64> {
        let item = self.get_mut(name)?;

        let new_stock = item
            .stock
            .checked_add(delta)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "stock".to_string(),
                min: 0,
                max: i64::MAX,
            })?;

        if new_stock < 0 {
            return Err(CoreError::NegativeStock {
                item: item.name.clone(),
                stock: item.stock,
                delta,
            });
        }

        item.stock = new_stock;
        Ok(new_stock)
    }

    /// Replaces an item's unit price.
    ///
    /// ## Errors
    /// - `ItemNotFound` if the name is absent
    /// - `InvalidArgument` if the price is negative
    pub fn set_price(&mut self, name: &str, price: Money) -> CoreResult<()> {
        let item = self.get_mut(name)?;
        validate_price(price)?;
        item.price = price;
        Ok(())
    }

    /// Items in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    fn get_mut(&mut self, name: &str) -> CoreResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.put("Shoes", Money::from_cents(550), 20).unwrap();
        catalog.put("Hat", Money::from_cents(760), 15).unwrap();
        catalog
    }

    #[test]
    fn test_get_and_not_found() {
        let catalog = sample();
        assert_eq!(catalog.get("Hat").unwrap().stock, 15);
        assert!(matches!(
            catalog.get("Gloves"),
            Err(CoreError::ItemNotFound(name)) if name == "Gloves"
        ));
    }

    #[test]
    fn test_put_overwrites_in_place() {
        let mut catalog = sample();
        catalog.put("Shoes", Money::from_cents(999), 3).unwrap();

        let names: Vec<&str> = catalog.list().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Shoes", "Hat"]);
        assert_eq!(catalog.get("Shoes").unwrap().price, Money::from_cents(999));
        assert_eq!(catalog.get("Shoes").unwrap().stock, 3);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_put_rejects_bad_input_without_mutation() {
        let mut catalog = sample();
        let before = catalog.clone();

        assert!(catalog.put("", Money::from_cents(100), 1).unwrap_err().is_invalid_argument());
        assert!(catalog
            .put("Belt", Money::from_cents(-1), 1)
            .unwrap_err()
            .is_invalid_argument());
        assert!(catalog
            .put("Shoes", Money::from_cents(100), -1)
            .unwrap_err()
            .is_invalid_argument());

        assert_eq!(catalog, before);
    }

    #[test]
    fn test_put_trims_name() {
        let mut catalog = Catalog::new();
        catalog.put("  Scarf  ", Money::zero(), 0).unwrap();
        assert_eq!(catalog.get("Scarf").unwrap().name, "Scarf");
    }

    #[test]
    fn test_adjust_stock() {
        let mut catalog = sample();

        assert_eq!(catalog.adjust_stock("Hat", 10).unwrap(), 25);
        assert_eq!(catalog.adjust_stock("Hat", -25).unwrap(), 0);

        let err = catalog.adjust_stock("Hat", -1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::NegativeStock { stock: 0, delta: -1, .. }
        ));
        assert_eq!(catalog.get("Hat").unwrap().stock, 0);

        assert!(matches!(
            catalog.adjust_stock("Gloves", 1),
            Err(CoreError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_adjust_stock_overflow_is_rejected() {
        let mut catalog = sample();
        assert!(catalog
            .adjust_stock("Hat", i64::MAX)
            .unwrap_err()
            .is_invalid_argument());
        assert_eq!(catalog.get("Hat").unwrap().stock, 15);
    }

    #[test]
    fn test_set_price() {
        let mut catalog = sample();

        catalog.set_price("Hat", Money::from_cents(800)).unwrap();
        assert_eq!(catalog.get("Hat").unwrap().price, Money::from_cents(800));

        catalog.set_price("Hat", Money::zero()).unwrap();
        assert!(catalog.get("Hat").unwrap().price.is_zero());

        assert!(catalog
            .set_price("Hat", Money::from_cents(-5))
            .unwrap_err()
            .is_invalid_argument());
        assert!(matches!(
            catalog.set_price("Gloves", Money::from_cents(100)),
            Err(CoreError::ItemNotFound(_))
        ));
    }
}
