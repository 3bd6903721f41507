//! # checkout-core: Pure Pricing Logic
//!
//! This crate is the **heart** of the checkout system. It prices a list of
//! purchased items against a catalog of unit prices and bulk offers, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    checkout-cli (presenter)                     │   │
//! │  │        args ──► config ──► process_checkout ──► summary         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                checkout-data (JSON loader)                      │   │
//! │  │         checkout file ──► Vec<LineItem>                         │   │
//! │  │         products file ──► RuleCatalog                           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ price_of  │  │   rules   │  │   │
//! │  │   │ Catalog   │  │           │  │ total_of  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, PricingRule, RuleCatalog)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The checkout evaluator
//! - [`error`] - Pricing error types
//! - [`validation`] - Per-line validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output
//! 2. **No I/O**: file system access is FORBIDDEN here
//! 3. **Integer Money**: all amounts are signed i64, negatives allowed
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{total_of, LineItem, PricingRule, RuleCatalog};
//!
//! let catalog: RuleCatalog = [
//!     ("A".to_string(), PricingRule::with_offer(50, 3, 140)),
//!     ("C".to_string(), PricingRule::new(25)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let lines = vec![LineItem::new("A", 4), LineItem::new("C", 1)];
//!
//! // 3 x A at the offer price, 1 x A at unit price, 1 x C
//! let total = total_of(&lines, &catalog).unwrap();
//! assert_eq!(total.amount(), 140 + 50 + 25);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use pricing::{price_of, total_of};
pub use types::*;
