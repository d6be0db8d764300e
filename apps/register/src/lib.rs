//! # Till Register Library
//!
//! The register application: a shell over `till-core` that an operator (or
//! a script) drives one command per line.
//!
//! ## Module Organization
//! ```text
//! till_register_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── Line parsing, dispatch, rendering
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session behind a mutex
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── sale.rs     ◄─── Sell, till balance
//! │   ├── inventory.rs◄─── Item list and maintenance
//! │   └── report.rs   ◄─── Report and CSV export
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shell::Shell;
use state::{ConfigState, SessionState};
use till_core::Session;

/// Runs the register until the operator quits or input ends.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Register Startup                                  │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,till=debug; override with RUST_LOG                  │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then TILL_* environment variables                       │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • SessionState: seeded catalog, empty ledger, $500.00 till          │
/// │     • ConfigState: read-only from here on                               │
/// │                                                                         │
/// │  4. Run Shell ────────────────────────────────────────────────────────► │
/// │     • Prompt only when stdin is a terminal                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(
        store = %config.store_name,
        export_dir = %config.export_dir.display(),
        "Starting Till POS register"
    );

    let session = SessionState::new(Session::seeded());
    let shell = Shell::new(session, config);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    shell
        .run(stdin.lock(), io::stdout().lock(), interactive)
        .context("register shell stopped unexpectedly")?;

    let till = shell.session().with_session(|s| s.till().read());
    info!(till = %till, "Register closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=till=trace` - Show trace for till crates only
/// - Default: `info,till=debug`
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,till=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
