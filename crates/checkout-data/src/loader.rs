//! # Loader
//!
//! Reads checkout and products files from disk.
//!
//! Both loaders read the whole file into memory and decode it in one go.
//! Input files are small (one checkout, one catalog).

use std::path::Path;

use checkout_core::{LineItem, RuleCatalog};
use tracing::debug;

use crate::error::{DataError, DataResult};

/// Loads the line items of a checkout file, preserving file order.
///
/// The file must hold a JSON array of `{"code", "quantity"}` objects. Any
/// integer quantity decodes, negatives included.
pub fn load_checkout_lines(path: impl AsRef<Path>) -> DataResult<Vec<LineItem>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| DataError::read(path, e))?;
    let lines = parse_checkout_lines(&contents).map_err(|e| DataError::parse(path, e))?;

    debug!(path = %path.display(), lines = lines.len(), "Checkout file loaded");
    Ok(lines)
}

/// Loads the pricing rules of a products file.
///
/// The file must hold a JSON object keyed by product code. `offerQuantity`
/// and `offerPrice` default to 0 when absent.
pub fn load_rule_catalog(path: impl AsRef<Path>) -> DataResult<RuleCatalog> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| DataError::read(path, e))?;
    let catalog = parse_rule_catalog(&contents).map_err(|e| DataError::parse(path, e))?;

    debug!(path = %path.display(), products = catalog.len(), "Products file loaded");
    Ok(catalog)
}

/// Decodes checkout JSON held in memory.
pub fn parse_checkout_lines(json: &str) -> serde_json::Result<Vec<LineItem>> {
    serde_json::from_str(json)
}

/// Decodes products JSON held in memory.
pub fn parse_rule_catalog(json: &str) -> serde_json::Result<RuleCatalog> {
    serde_json::from_str(json)
}

// =============================================================================
// Unit Tests
// =============================================================================
