//! # Checkout CLI Entry Point
//!
//! ```text
//! checkout [--config <PATH>] [--products <PATH>] [CHECKOUT]
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    checkout_cli::run()
}
