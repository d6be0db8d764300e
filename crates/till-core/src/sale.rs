//! # Sale Processor
//!
//! The only operation that touches all three pieces of register state.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    process_sale(item, qty, cash)                        │
//! │                                                                         │
//! │  1. item in catalog?        ── no ──► ItemNotFound                      │
//! │  2. qty ≥ 1?                ── no ──► InvalidArgument                   │
//! │  3. total = price × qty                                                 │
//! │  4. cash ≥ total?           ── no ──► InsufficientFunds { total }       │
//! │  5. stock ≥ qty?            ── no ──► OutOfStock { stock }              │
//! │           │                                                             │
//! │           ▼   (nothing has been touched up to here)                     │
//! │  6. till += total; stock −= qty; sold += qty                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  SaleReceipt { change = cash − total, .. }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Funds are checked before stock. When both fail the operator is told to
//! collect more cash.

use chrono::Utc;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::ledger::SalesLedger;
use crate::money::Money;
use crate::till::TillBalance;
use crate::types::SaleReceipt;
use crate::validation::validate_quantity;

/// Applies sales to a session. Obtained from [`crate::Session::sales`].
#[derive(Debug)]
pub struct SaleProcessor<'a> {
    catalog: &'a mut Catalog,
    ledger: &'a mut SalesLedger,
    till: &'a mut TillBalance,
    receipts_issued: &'a mut u64,
}

impl<'a> SaleProcessor<'a> {
    pub fn new(
        catalog: &'a mut Catalog,
        ledger: &'a mut SalesLedger,
        till: &'a mut TillBalance,
        receipts_issued: &'a mut u64,
    ) -> Self {
        SaleProcessor {
            catalog,
            ledger,
            till,
            receipts_issued,
        }
    }

    /// Sells `quantity` units of `item_name` for `cash_given`.
    ///
    /// ## Returns
    /// A receipt whose `change` is `cash_given − price × quantity`.
    ///
    /// ## Errors
    /// `ItemNotFound`, `InvalidArgument`, `InsufficientFunds` (carries the
    /// total) or `OutOfStock` (carries the stock on hand). On any error the
    /// catalog, ledger and till are exactly as they were.
    pub fn process_sale(
        &mut self,
        item_name: &str,
        quantity: i64,
        cash_given: Money,
    ) -> CoreResult<SaleReceipt> {
        let item = self.catalog.get(item_name)?;
        validate_quantity(quantity)?;

        let unit_price = item.price;
        let total = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: i64::MAX / unit_price.cents().max(1),
            })?;

        if cash_given < total {
            return Err(CoreError::InsufficientFunds {
                required: total,
                tendered: cash_given,
            });
        }

        if !item.can_sell(quantity) {
            return Err(CoreError::OutOfStock {
                item: item.name.clone(),
                available: item.stock,
                requested: quantity,
            });
        }

        if self.till.read().checked_add(total).is_none() {
            return Err(ValidationError::OutOfRange {
                field: "total".to_string(),
                min: 0,
                max: i64::MAX - self.till.read().cents(),
            }
            .into());
        }

        let name = item.name.clone();
        let change = cash_given - total;

        // Every precondition of the three writes was checked above.
        self.till.credit(total)?;
        self.catalog.adjust_stock(&name, -quantity)?;
        self.ledger.record_sale(&name, quantity)?;

        *self.receipts_issued += 1;

        Ok(SaleReceipt {
            receipt_number: *self.receipts_issued,
            item: name,
            quantity,
            unit_price,
            total,
            tendered: cash_given,
            change,
            completed_at: Utc::now(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_sale_updates_all_state() {
        let mut session = Session::seeded();

        let receipt = session
            .sales()
            .process_sale("Shoes", 3, Money::from_cents(2000))
            .unwrap();

        assert_eq!(receipt.total, Money::from_cents(1650));
        assert_eq!(receipt.change, Money::from_cents(350));
        assert_eq!(receipt.receipt_number, 1);
        assert_eq!(session.catalog().get("Shoes").unwrap().stock, 17);
        assert_eq!(session.ledger().units_sold("Shoes"), 3);
        assert_eq!(session.till().read(), Money::from_cents(51650));
    }

    #[test]
    fn test_receipt_numbers_increase() {
        let mut session = Session::seeded();
        let first = session
            .sales()
            .process_sale("Hat", 1, Money::from_cents(1000))
            .unwrap();
        let second = session
            .sales()
            .process_sale("Hat", 1, Money::from_cents(1000))
            .unwrap();
        assert_eq!((first.receipt_number, second.receipt_number), (1, 2));
    }

    #[test]
    fn test_exact_cash_gives_zero_change() {
        let mut session = Session::seeded();
        let receipt = session
            .sales()
            .process_sale("Socks", 2, Money::from_cents(1630))
            .unwrap();
        assert!(receipt.change.is_zero());
    }

    #[test]
    fn test_unknown_item() {
        let mut session = Session::seeded();
        let err = session
            .sales()
            .process_sale("Gloves", 1, Money::from_cents(1000))
            .unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(_)));
    }

    #[test]
    fn test_non_positive_quantity() {
        let mut session = Session::seeded();
        for qty in [0, -1] {
            let err = session
                .sales()
                .process_sale("Hat", qty, Money::from_cents(1000))
                .unwrap_err();
            assert!(err.is_invalid_argument());
        }
        assert_eq!(session, Session::seeded());
    }

    #[test]
    fn test_funds_checked_before_stock() {
        let mut session = Session::seeded();
        // 50 Socks: both short on cash ($407.50 needed) and on stock (30).
        let err = session
            .sales()
            .process_sale("Socks", 50, Money::from_cents(1000))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientFunds { required, .. } if required == Money::from_cents(40750)
        ));
    }

    #[test]
    fn test_quantity_overflow_is_invalid_argument() {
        let mut session = Session::seeded();
        let err = session
            .sales()
            .process_sale("Hat", i64::MAX, Money::from_cents(i64::MAX))
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(session, Session::seeded());
    }

    #[test]
    fn test_free_item_sale() {
        let mut session = Session::seeded();
        session.inventory().add_item("Sticker", Money::zero(), 5).unwrap();

        let receipt = session
            .sales()
            .process_sale("Sticker", 2, Money::zero())
            .unwrap();
        assert!(receipt.total.is_zero());
        assert_eq!(session.till().read(), Money::from_cents(50000));
        assert_eq!(session.ledger().units_sold("Sticker"), 2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn session_with(price: i64, stock: i64) -> Session {
            let mut session = Session::new(Money::from_cents(50000));
            session
                .inventory()
                .add_item("Widget", Money::from_cents(price), stock)
                .unwrap();
            session
        }

        proptest! {
            /// Property: a valid sale moves exactly price × qty into the till,
            /// qty out of stock, qty into the ledger.
            #[test]
            fn valid_sale_postconditions(
                price in 0i64..100_000,
                stock in 1i64..1_000,
                qty_seed in 1i64..1_000,
                extra in 0i64..100_000,
            ) {
                let qty = 1 + (qty_seed - 1) % stock;
                let mut session = session_with(price, stock);
                let total = price * qty;
                let cash = Money::from_cents(total + extra);

                let receipt = session.sales().process_sale("Widget", qty, cash).unwrap();

                prop_assert_eq!(receipt.change, Money::from_cents(extra));
                prop_assert_eq!(session.till().read(), Money::from_cents(50000 + total));
                prop_assert_eq!(session.catalog().get("Widget").unwrap().stock, stock - qty);
                prop_assert_eq!(session.ledger().units_sold("Widget"), qty);
            }

            /// Property: short cash rejects and leaves everything untouched.
            #[test]
            fn insufficient_funds_leaves_state_unchanged(
                price in 1i64..100_000,
                stock in 0i64..1_000,
                qty in 1i64..1_000,
                short_by in 1i64..100_000,
            ) {
                let mut session = session_with(price, stock);
                let before = session.clone();
                let total = price * qty;
                let cash = Money::from_cents((total - short_by).max(0).min(total - 1));

                let err = session.sales().process_sale("Widget", qty, cash).unwrap_err();

                let is_insufficient_funds = matches!(
                    err,
                    CoreError::InsufficientFunds { required, .. } if required == Money::from_cents(total)
                );
                prop_assert!(is_insufficient_funds);
                prop_assert_eq!(session, before);
            }

            /// Property: enough cash but too little stock rejects with the
            /// stock on hand and leaves everything untouched.
            #[test]
            fn out_of_stock_leaves_state_unchanged(
                price in 0i64..10_000,
                stock in 0i64..500,
                over_by in 1i64..500,
            ) {
                let mut session = session_with(price, stock);
                let before = session.clone();
                let qty = stock + over_by;
                let cash = Money::from_cents(price * qty);

                let err = session.sales().process_sale("Widget", qty, cash).unwrap_err();

                let is_out_of_stock = matches!(
                    err,
                    CoreError::OutOfStock { available, .. } if available == stock
                );
                prop_assert!(is_out_of_stock);
                prop_assert_eq!(session, before);
            }
        }
    }
}
