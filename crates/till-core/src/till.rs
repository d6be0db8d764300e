//! # Till Balance
//!
//! The cash held by the register. It starts at an opening balance and only
//! grows, by the total of each sale.

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::validate_credit;

/// Cash in the register drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TillBalance {
    balance: Money,
}

impl TillBalance {
    /// Opens the till with `opening` in the drawer.
    pub fn new(opening: Money) -> Self {
        TillBalance { balance: opening }
    }

    /// Adds `amount` to the drawer.
    ///
    /// ## Errors
    /// `InvalidArgument` if `amount` is negative or the balance would
    /// overflow. The balance is unchanged on error.
    pub fn credit(&mut self, amount: Money) -> CoreResult<Money> {
        validate_credit(amount)?;

        let current = self.balance;
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: 0,
                max: i64::MAX - current.cents(),
            })?;

        self.balance = updated;
        Ok(updated)
    }

    /// Current balance.
    #[inline]
    pub fn read(&self) -> Money {
        self.balance
    }
}
