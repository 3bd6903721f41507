//! # Validation Module
//!
//! Per-line validation rules applied by the evaluator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: checkout-data (JSON decode)                                  │
//! │  ├── Shape checks (array of objects, numeric fields)                   │
//! │  └── Lenient: negative numbers are accepted                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (evaluation time)                                │
//! │  ├── quantity >= 0                                                     │
//! │  └── offer_quantity >= 0                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_offer_quantity, validate_quantity};
//! use checkout_core::{LineItem, PricingRule};
//!
//! assert!(validate_quantity(&LineItem::new("A", 3)).is_ok());
//! assert!(validate_quantity(&LineItem::new("A", -3)).is_err());
//! assert!(validate_offer_quantity("A", &PricingRule::with_offer(50, -1, 0)).is_err());
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{LineItem, PricingRule};

/// Rejects a line whose quantity is below zero. Zero is allowed.
pub fn validate_quantity(line: &LineItem) -> CoreResult<()> {
    if line.quantity < 0 {
        return Err(CoreError::NegativeQuantity {
            code: line.code.clone(),
            quantity: line.quantity,
        });
    }

    Ok(())
}

/// Rejects a rule whose offer quantity is below zero.
///
/// A zero offer quantity passes: it means "no offer", whatever the offer
/// price says.
pub fn validate_offer_quantity(code: &str, rule: &PricingRule) -> CoreResult<()> {
    if rule.offer_quantity < 0 {
        return Err(CoreError::NegativeOfferQuantity {
            code: code.to_string(),
            offer_quantity: rule.offer_quantity,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(&LineItem::new("A", 0)).is_ok());
        assert!(validate_quantity(&LineItem::new("A", 29124908)).is_ok());

        let err = validate_quantity(&LineItem::new("D", -3)).unwrap_err();
        assert_eq!(
            err,
            CoreError::NegativeQuantity {
                code: "D".to_string(),
                quantity: -3
            }
        );
    }

    #[test]
    fn test_validate_offer_quantity() {
        assert!(validate_offer_quantity("C", &PricingRule::new(25)).is_ok());
        assert!(validate_offer_quantity("C", &PricingRule::with_offer(25, 0, 99)).is_ok());
        assert!(validate_offer_quantity("A", &PricingRule::with_offer(50, 3, 140)).is_ok());

        let err = validate_offer_quantity("D", &PricingRule::with_offer(15, -15, 10)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::NegativeOfferQuantity { offer_quantity: -15, .. }
        ));
    }
}
