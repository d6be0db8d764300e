//! # Session
//!
//! One register's worth of state: catalog, sales ledger and till. Every core
//! operation goes through a `Session` value; there are no globals, so tests
//! and multiple registers each get their own.
//!
//! ## Accessor Pattern
//! ```text
//! session.sales()      ──► SaleProcessor   (borrows catalog, ledger, till)
//! session.inventory()  ──► InventoryManager (borrows catalog)
//! session.catalog() / ledger() / till()   ──► read-only views
//! ```

use crate::catalog::Catalog;
use crate::inventory::InventoryManager;
use crate::ledger::SalesLedger;
use crate::money::Money;
use crate::sale::SaleProcessor;
use crate::till::TillBalance;
use crate::types::{Item, LedgerSnapshot};

/// Opening till balance of a freshly started register ($500.00).
pub const SEED_TILL: Money = Money::from_cents(50000);

/// Starting catalog: name, price, stock.
pub const SEED_ITEMS: &[(&str, Money, i64)] = &[
    ("Shoes", Money::from_cents(550), 20),
    ("Hat", Money::from_cents(760), 15),
    ("Socks", Money::from_cents(815), 30),
];

/// Register state for one run of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    catalog: Catalog,
    ledger: SalesLedger,
    till: TillBalance,
    receipts_issued: u64,
}

impl Session {
    /// Empty catalog and ledger, `opening_till` in the drawer.
    pub fn new(opening_till: Money) -> Self {
        Session {
            catalog: Catalog::new(),
            ledger: SalesLedger::new(),
            till: TillBalance::new(opening_till),
            receipts_issued: 0,
        }
    }

    /// The state a register starts the day with.
    pub fn seeded() -> Self {
        let mut session = Session::new(SEED_TILL);
        session.catalog = Catalog::from_seed(
            SEED_ITEMS
                .iter()
                .map(|(name, price, stock)| Item::new(*name, *price, *stock)),
        );
        session
    }

    /// Sale processing against this session.
    pub fn sales(&mut self) -> SaleProcessor<'_> {
        SaleProcessor::new(
            &mut self.catalog,
            &mut self.ledger,
            &mut self.till,
            &mut self.receipts_issued,
        )
    }

    /// Catalog maintenance against this session.
    pub fn inventory(&mut self) -> InventoryManager<'_> {
        InventoryManager::new(&mut self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    pub fn till(&self) -> &TillBalance {
        &self.till
    }

    /// Copy of the ledger for the report exporter.
    pub fn ledger_snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    /// Number of sales completed so far.
    pub fn receipts_issued(&self) -> u64 {
        self.receipts_issued
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state() {
        let session = Session::seeded();

        assert_eq!(session.till().read(), Money::from_cents(50000));
        assert!(session.ledger().is_empty());
        assert_eq!(session.receipts_issued(), 0);

        let rows: Vec<(&str, i64, i64)> = session
            .catalog()
            .list()
            .map(|i| (i.name.as_str(), i.price.cents(), i.stock))
            .collect();
        assert_eq!(
            rows,
            vec![("Shoes", 550, 20), ("Hat", 760, 15), ("Socks", 815, 30)]
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = Session::seeded();
        let b = Session::seeded();

        a.inventory().restock("Hat", 5).unwrap();

        assert_eq!(a.catalog().get("Hat").unwrap().stock, 20);
        assert_eq!(b.catalog().get("Hat").unwrap().stock, 15);
    }

    #[test]
    fn test_new_is_empty() {
        let session = Session::new(Money::from_cents(1000));
        assert!(session.catalog().is_empty());
        assert_eq!(session.till().read().cents(), 1000);
    }
}
