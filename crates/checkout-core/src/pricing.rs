//! # Pricing Module
//!
//! The checkout evaluator: prices each line against the rule catalog and
//! folds the line prices into a checkout total.
//!
//! ## Per-Line Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price_of(line, catalog)                                                │
//! │                                                                         │
//! │  quantity < 0? ───────────────────────► NegativeQuantity                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.lookup(code) = None? ────────► ProductNotFound                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  offer_quantity < 0? ─────────────────► NegativeOfferQuantity           │
//! │       │                                                                 │
//! │       ├── offer_quantity > 0:                                           │
//! │       │     (q / k) × offer_price + (q % k) × price                     │
//! │       │                                                                 │
//! │       └── offer_quantity == 0:                                          │
//! │             q × price                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Division truncates toward zero. Since the quantity is already known to be
//! non-negative and `k` positive, the remainder is always in `0..k`.
//!
//! ## Aggregate
//! `total_of` walks the lines in input order and stops at the first error.
//! An empty checkout costs zero.

use tracing::{debug, trace};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, PricingRule, RuleCatalog};
use crate::validation::{validate_offer_quantity, validate_quantity};

/// Prices a single checkout line.
///
/// ## Example
/// ```rust
/// use checkout_core::{price_of, LineItem, PricingRule, RuleCatalog};
///
/// let mut catalog = RuleCatalog::new();
/// catalog.insert("B", PricingRule::with_offer(35, 2, 60));
///
/// // One pair at 60, one single at 35
/// let price = price_of(&LineItem::new("B", 3), &catalog).unwrap();
/// assert_eq!(price.amount(), 95);
/// ```
pub fn price_of(line: &LineItem, catalog: &RuleCatalog) -> CoreResult<Money> {
    validate_quantity(line)?;

    let rule = catalog
        .lookup(&line.code)
        .ok_or_else(|| CoreError::ProductNotFound(line.code.clone()))?;

    validate_offer_quantity(&line.code, rule)?;

    let price = line_amount(line.quantity, rule).ok_or_else(|| CoreError::AmountOverflow {
        code: line.code.clone(),
    })?;

    trace!(
        code = %line.code,
        quantity = line.quantity,
        offer = rule.has_offer(),
        price = price.amount(),
        "Line priced"
    );

    Ok(price)
}

/// Prices a whole checkout.
///
/// Returns the first line error unchanged; lines after it are not priced.
///
/// ## Example
/// ```rust
/// use checkout_core::{total_of, CoreError, LineItem, PricingRule, RuleCatalog};
///
/// let mut catalog = RuleCatalog::new();
/// catalog.insert("C", PricingRule::new(25));
///
/// assert_eq!(total_of(&[], &catalog).unwrap().amount(), 0);
///
/// let err = total_of(&[LineItem::new("C", 1), LineItem::new("X", 1)], &catalog).unwrap_err();
/// assert_eq!(err, CoreError::ProductNotFound("X".to_string()));
/// ```
pub fn total_of(lines: &[LineItem], catalog: &RuleCatalog) -> CoreResult<Money> {
    let total = lines.iter().try_fold(Money::zero(), |total, line| {
        let price = price_of(line, catalog)?;
        total
            .checked_add(price)
            .ok_or_else(|| CoreError::AmountOverflow {
                code: line.code.clone(),
            })
    })?;

    debug!(lines = lines.len(), total = total.amount(), "Checkout priced");

    Ok(total)
}

impl LineItem {
    /// Method form of [`price_of`].
    pub fn price(&self, catalog: &RuleCatalog) -> CoreResult<Money> {
        price_of(self, catalog)
    }
}

/// Bulk offer math for an already-validated line. `None` on overflow.
fn line_amount(quantity: i64, rule: &PricingRule) -> Option<Money> {
    if rule.has_offer() {
        let groups = quantity / rule.offer_quantity;
        let singles = quantity % rule.offer_quantity;

        let grouped = rule.bundle_price().checked_mul_quantity(groups)?;
        let loose = rule.unit_price().checked_mul_quantity(singles)?;
        grouped.checked_add(loose)
    } else {
        rule.unit_price().checked_mul_quantity(quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
