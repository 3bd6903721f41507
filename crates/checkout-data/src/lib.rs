//! # checkout-data: JSON Data Loading Layer
//!
//! Decodes the two input files of a checkout run into checkout-core types.
//!
//! ## Module Organization
//! ```text
//! checkout_data/
//! ├── lib.rs      ◄─── You are here (exports)
//! ├── loader.rs   ◄─── File reading + JSON decoding
//! └── error.rs    ◄─── DataError
//! ```
//!
//! ## File Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout file (array, order preserved)                                 │
//! │    [{"code": "A", "quantity": 3}, {"code": "B", "quantity": 3}]         │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                  Vec<LineItem>                                          │
//! │                                                                         │
//! │  products file (object keyed by product code)                           │
//! │    {"A": {"price": 50, "offerQuantity": 3, "offerPrice": 140},          │
//! │     "C": {"price": 25}}                                                 │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                   RuleCatalog                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loading never validates prices or quantities. Negative numbers decode
//! fine and are rejected by the evaluator.

pub mod error;
pub mod loader;

pub use error::{DataError, DataResult};
pub use loader::{load_checkout_lines, load_rule_catalog, parse_checkout_lines, parse_rule_catalog};
