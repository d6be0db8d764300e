//! # State Module
//!
//! Register state, split by concern so each command declares only what it
//! needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Shell                                      │   │
//! │  │  Shell::new(session_state, config_state)                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │             ┌────────────────┴────────────────┐                        │
//! │             ▼                                 ▼                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │    SessionState      │          │    ConfigState       │            │
//! │  │                      │          │                      │            │
//! │  │  Arc<Mutex<          │          │  store_name          │            │
//! │  │    Session           │          │  currency_symbol     │            │
//! │  │  >>                  │          │  export_dir          │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;
