//! # till-core: Pure Business Logic for Till POS
//!
//! This crate is the **heart** of Till POS. It holds every business rule of
//! the register (selling, inventory, reporting) with no file system or
//! network access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Till POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (register shell, or any UI)           │   │
//! │  │     Sell ──► Inventory (add / price / restock) ──► Report       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ primitive values in, Result out        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  session  │  │   sale    │  │ inventory │  │  report   │  │   │
//! │  │   │  Session  │  │ Processor │  │  Manager  │  │  CSV rows │  │   │
//! │  │   └─────┬─────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │         │                                                       │   │
//! │  │   ┌─────▼─────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │  catalog  │  │  ledger   │  │   till    │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO NETWORK • NO GLOBALS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Item, LedgerEntry, SaleReceipt)
//! - [`error`] - Domain error types
//! - [`validation`] - Typed input boundary (parsing and numeric rules)
//! - [`catalog`], [`ledger`], [`till`] - the three pieces of register state
//! - [`sale`] - the one multi-entity transaction
//! - [`inventory`] - add / edit price / restock
//! - [`report`] - units-sold report as CSV
//! - [`session`] - owns the state and hands out the operation facades
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{Money, Session};
//!
//! let mut session = Session::seeded();
//!
//! let receipt = session
//!     .sales()
//!     .process_sale("Shoes", 3, Money::from_cents(2000))
//!     .unwrap();
//!
//! assert_eq!(receipt.change, Money::from_cents(350));
//! assert_eq!(session.till().read(), Money::from_cents(51650));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod report;
pub mod sale;
pub mod session;
pub mod till;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ReportError, ValidationError};
pub use inventory::InventoryManager;
pub use ledger::SalesLedger;
pub use money::Money;
pub use sale::SaleProcessor;
pub use session::Session;
pub use till::TillBalance;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest item name the catalog accepts.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Header row of the units-sold report.
pub const REPORT_HEADER: [&str; 2] = ["Item", "Units Sold"];
