//! # Register Commands
//!
//! Every operation the shell (or any other front end) can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── sale.rs       ◄─── Sell, read the till
//! ├── inventory.rs  ◄─── List, add, edit price, restock
//! └── report.rs     ◄─── Units-sold report, CSV export
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  till> sell Shoes 3 20.00                                               │
//! │         │                                                               │
//! │         │ (tokenize + clap)                                             │
//! │         ▼                                                               │
//! │  fn process_sale(                                                       │
//! │      session: &SessionState,  ◄── Only the state it needs               │
//! │      item: &str,              ◄── Raw operator text                     │
//! │      quantity: &str,                                                    │
//! │      cash: &str,                                                        │
//! │  ) -> Result<SaleResponse, ApiError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Shell renders SaleResponse as text or JSON                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take numbers as text and run them through the core's parsers,
//! so the shell never decides what counts as a valid price or quantity.

pub mod inventory;
pub mod report;
pub mod sale;
