//! # Domain Types
//!
//! Core domain types used throughout the checkout system.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    LineItem     │   │  PricingRule    │   │    RuleCatalog      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  code           │   │  price          │   │  code → PricingRule │   │
//! │  │  quantity       │   │  offer_quantity │   │  (HashMap)          │   │
//! │  │                 │   │  offer_price    │   │                     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Construction
//! Nothing here validates on construction. A negative quantity or a
//! negative offer quantity is accepted into the value and rejected later by
//! the evaluator, so a loaded file is always representable.
//!
//! ## JSON Shapes
//! ```json
//! [{"code": "A", "quantity": 3}]
//! {"A": {"price": 50, "offerQuantity": 3, "offerPrice": 140}, "C": {"price": 25}}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One entry of a checkout: a product code plus purchased quantity.
///
/// Missing JSON fields fall back to an empty code and zero quantity; an
/// empty code then fails the catalog lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Product code, the catalog key.
    #[serde(alias = "Code")]
    pub code: String,

    /// Purchased quantity as provided by the input.
    #[serde(alias = "Quantity")]
    pub quantity: i64,
}

impl LineItem {
    pub fn new(code: impl Into<String>, quantity: i64) -> Self {
        LineItem {
            code: code.into(),
            quantity,
        }
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// Unit price plus an optional "buy N for P" bulk offer.
///
/// An `offer_quantity` of 0 means no offer; `offer_price` is then ignored
/// even if it is nonzero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    /// Price of a single unit. May be negative.
    #[serde(alias = "Price")]
    pub price: i64,

    /// Size of one offer group. 0 disables the offer.
    #[serde(default, alias = "OfferQuantity")]
    pub offer_quantity: i64,

    /// Price of one complete offer group. May be negative.
    #[serde(default, alias = "OfferPrice")]
    pub offer_price: i64,
}

impl PricingRule {
    /// Rule with a unit price and no bulk offer.
    pub const fn new(price: i64) -> Self {
        PricingRule {
            price,
            offer_quantity: 0,
            offer_price: 0,
        }
    }

    /// Rule with a unit price and a "buy `offer_quantity` for `offer_price`"
    /// offer.
    pub const fn with_offer(price: i64, offer_quantity: i64, offer_price: i64) -> Self {
        PricingRule {
            price,
            offer_quantity,
            offer_price,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub const fn unit_price(&self) -> Money {
        Money::from_amount(self.price)
    }

    /// Returns the offer group price as Money.
    #[inline]
    pub const fn bundle_price(&self) -> Money {
        Money::from_amount(self.offer_price)
    }

    /// True when a bulk offer applies (offer quantity above zero).
    #[inline]
    pub const fn has_offer(&self) -> bool {
        self.offer_quantity > 0
    }
}

// =============================================================================
// Rule Catalog
// =============================================================================

/// Per-product pricing rules for one evaluation, keyed by product code.
///
/// Keys are unique by construction (JSON object keys, map inserts). The
/// catalog is read-only while a checkout is priced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCatalog(HashMap<String, PricingRule>);

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `code`, returning the previous rule.
    pub fn insert(&mut self, code: impl Into<String>, rule: PricingRule) -> Option<PricingRule> {
        self.0.insert(code.into(), rule)
    }

    /// Looks up the rule for a product code.
    #[inline]
    pub fn lookup(&self, code: &str) -> Option<&PricingRule> {
        self.0.get(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(code, rule)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PricingRule)> {
        self.0.iter().map(|(code, rule)| (code.as_str(), rule))
    }
}

impl FromIterator<(String, PricingRule)> for RuleCatalog {
    fn from_iter<I: IntoIterator<Item = (String, PricingRule)>>(iter: I) -> Self {
        RuleCatalog(iter.into_iter().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_rule_constructors() {
        let plain = PricingRule::new(25);
        assert_eq!(plain.unit_price().amount(), 25);
        assert!(!plain.has_offer());

        let offer = PricingRule::with_offer(50, 3, 140);
        assert!(offer.has_offer());
        assert_eq!(offer.bundle_price().amount(), 140);
    }

    #[test]
    fn test_negative_offer_quantity_is_not_an_offer() {
        let rule = PricingRule::with_offer(15, -15, 10);
        assert!(!rule.has_offer());
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = RuleCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert("A", PricingRule::with_offer(50, 3, 140));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("A"), Some(&PricingRule::with_offer(50, 3, 140)));
        assert_eq!(catalog.lookup("B"), None);
        assert_eq!(catalog.lookup(""), None);
    }

    #[test]
    fn test_catalog_insert_replaces() {
        let mut catalog = RuleCatalog::new();
        catalog.insert("A", PricingRule::new(1));
        let previous = catalog.insert("A", PricingRule::new(2));
        assert_eq!(previous, Some(PricingRule::new(1)));
        assert_eq!(catalog.lookup("A").map(|r| r.price), Some(2));
    }

    #[test]
    fn test_rule_json_offer_fields_default_to_zero() {
        let rule: PricingRule = serde_json::from_str(r#"{"price": 12}"#).unwrap();
        assert_eq!(rule, PricingRule::new(12));

        let rule: PricingRule =
            serde_json::from_str(r#"{"price": 35, "offerQuantity": 2, "offerPrice": 60}"#)
                .unwrap();
        assert_eq!(rule, PricingRule::with_offer(35, 2, 60));
    }

    #[test]
    fn test_rule_json_requires_price() {
        let result: Result<PricingRule, _> = serde_json::from_str(r#"{"offerQuantity": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_line_item_json_is_lenient() {
        let line: LineItem = serde_json::from_str(r#"{"code": "D", "quantity": -1}"#).unwrap();
        assert_eq!(line, LineItem::new("D", -1));

        let empty: LineItem = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LineItem::default());
    }

    #[test]
    fn test_capitalised_keys_are_accepted() {
        let line: LineItem = serde_json::from_str(r#"{"Code": "A", "Quantity": 3}"#).unwrap();
        assert_eq!(line, LineItem::new("A", 3));

        let rule: PricingRule =
            serde_json::from_str(r#"{"Price": 50, "OfferQuantity": 3, "OfferPrice": 140}"#)
                .unwrap();
        assert_eq!(rule, PricingRule::with_offer(50, 3, 140));

        let rule: PricingRule = serde_json::from_str(r#"{"Price": 12}"#).unwrap();
        assert_eq!(rule, PricingRule::new(12));
    }

    #[test]
    fn test_catalog_json_is_keyed_by_code() {
        let catalog: RuleCatalog =
            serde_json::from_str(r#"{"A": {"price": 50}, "B": {"price": 35}}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("B"), Some(&PricingRule::new(35)));
    }
}
