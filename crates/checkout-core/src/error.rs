//! # Error Types
//!
//! Pricing error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  └── CoreError        - Line validation and pricing failures           │
//! │                                                                         │
//! │  checkout-data errors (separate crate)                                 │
//! │  └── DataError        - File read / JSON decode failures               │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the user sees on stderr                   │
//! │                                                                         │
//! │  Flow: CoreError / DataError → AppError → stderr + exit code           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, quantity)
//! 3. Errors are enum variants, never String
//! 4. Validation failures are permanent; nothing here is retryable

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
///
/// Every variant names the product code of the line that failed, so the
/// caller can report which line of the checkout is bad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A line item's quantity is below zero.
    #[error("Negative quantity {quantity} for product {code}")]
    NegativeQuantity { code: String, quantity: i64 },

    /// A line item's code has no entry in the rule catalog.
    ///
    /// ## When This Occurs
    /// - Typo in the checkout file
    /// - Product missing from the products file
    /// - Line item with no code at all (empty string)
    #[error("Product not found: {0:?}")]
    ProductNotFound(String),

    /// The matched pricing rule has an offer quantity below zero.
    #[error("Negative offer quantity {offer_quantity} for product {code}")]
    NegativeOfferQuantity { code: String, offer_quantity: i64 },

    /// A line or running total does not fit in an i64.
    #[error("Amount overflow while pricing product {code}")]
    AmountOverflow { code: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
