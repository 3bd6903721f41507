//! # Checkout CLI Library
//!
//! Command-line front end for the checkout pricing engine. `main.rs` only
//! calls [`run`]; everything else lives here so tests can drive it.
//!
//! ## Module Organization
//! ```text
//! checkout_cli/
//! ├── lib.rs      ◄─── You are here (args, pipeline, tracing setup)
//! ├── config.rs   ◄─── CheckoutConfig: defaults, TOML, env
//! ├── summary.rs  ◄─── Summary presenter
//! └── error.rs    ◄─── AppError + ErrorCode
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Resolve config: defaults → checkout.toml → env → arguments          │
//! │  3. Initialize logging (RUST_LOG, else configured filter)               │
//! │  4. Load checkout file → Vec<LineItem>                                  │
//! │  5. Load products file → RuleCatalog                                    │
//! │  6. total_of(lines, catalog)                                            │
//! │  7. Print summary to stdout, or error to stderr with exit code          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod summary;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use checkout_core::{total_of, Money};
use checkout_data::{load_checkout_lines, load_rule_catalog};

use config::{CheckoutConfig, ConfigResult};
use error::{AppError, AppResult};
use summary::write_summary;

/// Filter used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LOG_FILTER: &str = "warn,checkout_cli=info,checkout_data=info,checkout_core=info";

#[derive(Debug, Parser)]
#[command(
    name = "checkout",
    about = "Price a checkout against a products file",
    long_about = "Loads a checkout file (JSON array of {code, quantity}) and a products file \
                  (JSON object of {price, offerQuantity, offerPrice} keyed by code), applies \
                  bulk offers and prints the checkout total.",
    after_help = "Examples:\n  checkout\n  checkout ./basket.json\n  checkout --products ./prices.json ./basket.json"
)]
pub struct Cli {
    /// Checkout JSON file [default: ./checkout_data.json]
    #[arg(value_name = "CHECKOUT")]
    pub checkout: Option<PathBuf>,

    /// Products JSON file [default: ./product_data.json]
    #[arg(long, value_name = "PATH")]
    pub products: Option<PathBuf>,

    /// TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layers the arguments over an already loaded config.
    pub fn apply_to(&self, mut config: CheckoutConfig) -> CheckoutConfig {
        if let Some(path) = &self.checkout {
            config.checkout_path = path.clone();
        }
        if let Some(path) = &self.products {
            config.products_path = path.clone();
        }
        config
    }

    /// Loads file and environment config, applies the arguments and
    /// validates the result.
    pub fn resolve_config(&self) -> ConfigResult<CheckoutConfig> {
        let config = self.apply_to(CheckoutConfig::load(self.config.clone())?);
        config.validate()?;
        Ok(config)
    }
}

/// Binary entry point.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => return report(e.into()),
    };

    init_tracing(config.log_filter.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

/// Resolves config from `cli` and runs the checkout, writing the summary to
/// `out`. Does not install a log subscriber.
pub fn run_with<W: Write>(cli: &Cli, out: &mut W) -> AppResult<()> {
    let config = cli.resolve_config()?;
    execute(&config, out)
}

/// Runs the checkout described by `config`.
pub fn execute<W: Write>(config: &CheckoutConfig, out: &mut W) -> AppResult<()> {
    let total = process_checkout(&config.checkout_path, &config.products_path)?;
    write_summary(out, &config.checkout_path, &config.products_path, total)?;
    Ok(())
}

/// Loads both files and prices the checkout.
pub fn process_checkout(
    checkout_path: impl AsRef<Path>,
    products_path: impl AsRef<Path>,
) -> AppResult<Money> {
    let checkout_path = checkout_path.as_ref();
    let products_path = products_path.as_ref();

    info!(
        checkout = %checkout_path.display(),
        products = %products_path.display(),
        "Processing checkout"
    );

    let lines = load_checkout_lines(checkout_path)?;
    let catalog = load_rule_catalog(products_path)?;
    let total = total_of(&lines, &catalog)?;

    info!(total = total.amount(), "Checkout total computed");
    Ok(total)
}

fn report(e: AppError) -> ExitCode {
    debug!(code = e.code().as_str(), "Checkout failed");
    let _ = write_error(&mut io::stderr().lock(), &e);
    ExitCode::from(e.exit_code())
}

/// Writes the one-line error message shown to the user.
fn write_error<W: Write>(out: &mut W, e: &AppError) -> io::Result<()> {
    writeln!(out, "error: {e}")
}

/// Initializes the tracing subscriber, writing to stderr so stdout carries
/// only the summary.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-file load events
/// - `RUST_LOG=checkout_core=trace` - Show every priced line
/// - Otherwise the configured `log_filter`, else warnings plus run info
fn init_tracing(configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG_FILTER))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });

    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_resolve_to_defaults() {
        let cli = Cli::try_parse_from(["checkout"]).unwrap();
        let config = cli.apply_to(CheckoutConfig::default());
        assert_eq!(config.checkout_path, PathBuf::from("./checkout_data.json"));
        assert_eq!(config.products_path, PathBuf::from("./product_data.json"));
    }

    #[test]
    fn test_args_override_config() {
        let cli = Cli::try_parse_from([
            "checkout",
            "--products",
            "testdata/product_sets/1.json",
            "testdata/checkout_sets/1.json",
        ])
        .unwrap();
        let config = cli.apply_to(CheckoutConfig::default());
        assert_eq!(config.checkout_path, PathBuf::from("testdata/checkout_sets/1.json"));
        assert_eq!(config.products_path, PathBuf::from("testdata/product_sets/1.json"));
    }

    #[test]
    fn test_products_flag_alone_keeps_default_checkout() {
        let cli = Cli::try_parse_from(["checkout", "--products", "p.json"]).unwrap();
        let config = cli.apply_to(CheckoutConfig::default());
        assert_eq!(config.checkout_path, PathBuf::from("./checkout_data.json"));
        assert_eq!(config.products_path, PathBuf::from("p.json"));
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["checkout", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_error_is_written_once() {
        let err = AppError::from(config::ConfigError::NotFound(PathBuf::from("absent.toml")));
        let mut out = Vec::new();
        write_error(&mut out, &err).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: Config file not found: absent.toml\n"
        );
    }
}
