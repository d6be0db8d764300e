//! # Sale Commands

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::SessionState;
use till_core::validation::{parse_money, parse_quantity};
use till_core::SaleReceipt;

/// Result of a completed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub receipt_number: u64,
    pub item: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    pub tendered_cents: i64,
    pub change_cents: i64,
    /// RFC 3339, UTC
    pub completed_at: String,
}

impl From<SaleReceipt> for SaleResponse {
    fn from(r: SaleReceipt) -> Self {
        SaleResponse {
            receipt_number: r.receipt_number,
            item: r.item,
            quantity: r.quantity,
            unit_price_cents: r.unit_price.cents(),
            total_cents: r.total.cents(),
            tendered_cents: r.tendered.cents(),
            change_cents: r.change.cents(),
            completed_at: r.completed_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TillResponse {
    pub balance_cents: i64,
}

/// Sells `quantity` units of `item` for `cash`.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  till> sell Shoes 3 20.00                                              │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Parse quantity and cash                                    │    │
/// │  │  2. Core: item exists? cash covers total? enough stock?        │    │
/// │  │  3. Core: credit till, take stock, record units sold           │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Sale complete. Change due: $3.50                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// Any rejection leaves the session exactly as it was.
pub fn process_sale(
    session: &SessionState,
    item: &str,
    quantity: &str,
    cash: &str,
) -> Result<SaleResponse, ApiError> {
    debug!(item = %item, quantity = %quantity, cash = %cash, "process_sale command");

    let quantity = parse_quantity("quantity", quantity)?;
    let cash = parse_money("cash", cash)?;

    let receipt = session
        .with_session_mut(|s| s.sales().process_sale(item, quantity, cash))
        .map_err(|e| {
            warn!(item = %item, quantity = %quantity, cash = %cash, error = %e, "Sale rejected");
            ApiError::from(e)
        })?;

    info!(
        receipt = receipt.receipt_number,
        item = %receipt.item,
        quantity = receipt.quantity,
        total = %receipt.total,
        change = %receipt.change,
        "Sale completed"
    );

    Ok(receipt.into())
}

/// Reads the till balance.
pub fn get_till(session: &SessionState) -> TillResponse {
    debug!("get_till command");
    TillResponse {
        balance_cents: session.with_session(|s| s.till().read().cents()),
    }
}
