//! # Till Register Entry Point
//!
//! Starts the register shell on the current terminal (or on whatever is
//! piped into stdin).
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from the environment
//! 3. Create the seeded session
//! 4. Read and dispatch commands until `quit` or end of input

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    till_register_lib::run()
}
