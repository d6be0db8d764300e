//! # Validation Module
//!
//! The typed input boundary of the core. Text typed by an operator is turned
//! into `Money` and integers here, and every numeric rule the catalog,
//! ledger and till depend on is stated once.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                  │
//! │  ├── Widget bounds, prompts                                             │
//! │  └── Immediate operator feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: parse_* (THIS MODULE)                                         │
//! │  ├── "5.50" → Money(550), "abc" → InvalidFormat                         │
//! │  └── "-3"   → OutOfRange                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: validate_* (THIS MODULE, called by Catalog/Ledger/Till)       │
//! │  └── price ≥ 0, stock ≥ 0, quantity ≥ 1, name non-empty                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{parse_money, validate_quantity};
//! use till_core::Money;
//!
//! assert_eq!(parse_money("cash", "20.00").unwrap(), Money::from_cents(2000));
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("  Scarf ").unwrap(), "Scarf");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<&str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale or ledger quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a restock increment.
///
/// ## Rules
/// - At least one unit
pub fn validate_restock_units(units: i64) -> ValidationResult<()> {
    if units < 1 {
        return Err(ValidationError::OutOfRange {
            field: "units".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative; zero means "listed, none on hand"
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_price;
/// use till_core::Money;
///
/// assert!(validate_price(Money::from_cents(550)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    validate_non_negative_amount("price", price)
}

/// Validates an amount of money credited to the till.
pub fn validate_credit(amount: Money) -> ValidationResult<()> {
    validate_non_negative_amount("amount", amount)
}

fn validate_non_negative_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses an amount typed by the operator into `Money`.
///
/// ## Accepted Forms
/// `"5"`, `"5.5"`, `"5.50"`, `"$5.50"`, `" 5.50 "`, `".50"`
///
/// ## Rejected
/// - empty text
/// - more than two decimal places (`"5.505"`)
/// - anything non-numeric (`"five"`, `"5,50"`)
/// - negative amounts
///
/// ## Example
/// ```rust
/// use till_core::validation::parse_money;
/// use till_core::Money;
///
/// assert_eq!(parse_money("price", "$7.6").unwrap(), Money::from_cents(760));
/// assert!(parse_money("price", "-1").is_err());
/// ```
pub fn parse_money(field: &str, text: &str) -> ValidationResult<Money> {
    let text = text.trim();
    let text = text.strip_prefix('$').unwrap_or(text);

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.starts_with('-') {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("expected an amount such as 5.50"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid("expected an amount such as 5.50"));
    }
    if fraction.len() > 2 {
        return Err(invalid("at most two decimal places"));
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid("amount is too large"))?
    };
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
        _ => fraction.parse().map_err(|_| invalid("bad cents"))?,
    };

    dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .map(Money::from_cents)
        .ok_or_else(|| invalid("amount is too large"))
}

/// Parses a whole number of units typed by the operator.
///
/// Only the format is checked here; the caller applies the range rule it
/// needs (`validate_quantity`, `validate_stock`, `validate_restock_units`).
pub fn parse_quantity(field: &str, text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected a whole number".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("Shoes").unwrap(), "Shoes");
        assert_eq!(validate_item_name(" Wool Hat ").unwrap(), "Wool Hat");

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(201)).is_err());
        assert!(validate_item_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_restock_units() {
        assert!(validate_restock_units(1).is_ok());
        assert!(validate_restock_units(0).is_err());
        assert!(validate_restock_units(-5).is_err());
    }

    #[test]
    fn test_validate_stock_and_price() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(30).is_ok());
        assert!(validate_stock(-1).is_err());

        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
        assert!(validate_credit(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_parse_money_accepts() {
        assert_eq!(parse_money("cash", "20").unwrap().cents(), 2000);
        assert_eq!(parse_money("cash", "20.5").unwrap().cents(), 2050);
        assert_eq!(parse_money("cash", "20.05").unwrap().cents(), 2005);
        assert_eq!(parse_money("cash", "$1000.00").unwrap().cents(), 100000);
        assert_eq!(parse_money("cash", " 0.00 ").unwrap().cents(), 0);
        assert_eq!(parse_money("cash", ".5").unwrap().cents(), 50);
        assert_eq!(parse_money("cash", "7.").unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_money_rejects() {
        assert!(matches!(
            parse_money("cash", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_money("cash", "-5"),
            Err(ValidationError::OutOfRange { .. })
        ));
        for bad in [".", "abc", "5,50", "5.505", "1.2.3", "5 .50", "+5", "99999999999999999999"] {
            assert!(
                matches!(parse_money("cash", bad), Err(ValidationError::InvalidFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("quantity", "3").unwrap(), 3);
        assert_eq!(parse_quantity("quantity", " -2 ").unwrap(), -2);
        assert!(parse_quantity("quantity", "").is_err());
        assert!(parse_quantity("quantity", "2.5").is_err());
        assert!(parse_quantity("quantity", "many").is_err());
    }
}
