//! # Domain Types
//!
//! Core domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │   WIRE (as submitted)              VALIDATED (ready to score)           │
//! │  ┌─────────────────────┐          ┌─────────────────────┐               │
//! │  │  ReceiptPayload     │          │  Receipt            │               │
//! │  │  ─────────────────  │ validate │  ─────────────────  │               │
//! │  │  retailer?          │ ───────► │  retailer           │               │
//! │  │  purchaseDate?      │          │  purchase_date      │               │
//! │  │  purchaseTime?      │          │  purchase_time      │               │
//! │  │  items? [ItemPayload]          │  items [Item]       │               │
//! │  │  total? (RawAmount) │          │  total (Money)      │               │
//! │  └─────────────────────┘          └──────────┬──────────┘               │
//! │                                              │ calculate                │
//! │                                              ▼                          │
//! │                                   ┌─────────────────────┐               │
//! │                                   │  ScoredReceipt      │               │
//! │                                   │  id (UUID v4)       │               │
//! │                                   │  points             │               │
//! │                                   └─────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Every Wire Field Is Optional
//! A missing field is a validation failure with its own error variant, not
//! a deserialization failure. Keeping the fields `Option` lets
//! [`crate::validation`] see exactly which ones are absent.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Raw Amount
// =============================================================================

/// An amount exactly as it appeared in the request body.
///
/// Clients send amounts either as JSON strings (`"6.49"`) or as JSON
/// numbers (`6.49`). Both are kept as text; numbers go through their
/// shortest decimal form. Parsing into [`Money`] happens during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AmountRepr")]
pub struct RawAmount(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Number(serde_json::Number),
}

impl From<AmountRepr> for RawAmount {
    fn from(repr: AmountRepr) -> Self {
        match repr {
            AmountRepr::Text(text) => RawAmount(text),
            AmountRepr::Number(number) => RawAmount(number.to_string()),
        }
    }
}

impl RawAmount {
    /// The submitted text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawAmount {
    fn from(text: &str) -> Self {
        RawAmount(text.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(text: String) -> Self {
        RawAmount(text)
    }
}

// =============================================================================
// Wire Payloads
// =============================================================================

/// One line of a submitted receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub short_description: Option<String>,
    pub price: Option<RawAmount>,
}

impl ItemPayload {
    /// Creates a fully populated item payload.
    pub fn new(short_description: impl Into<String>, price: impl Into<RawAmount>) -> Self {
        ItemPayload {
            short_description: Some(short_description.into()),
            price: Some(price.into()),
        }
    }
}

/// A receipt as submitted to `POST /receipts/process`.
///
/// ## Example JSON
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [ { "shortDescription": "Mountain Dew 12PK", "price": "6.49" } ],
///   "total": "6.49"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub items: Option<Vec<ItemPayload>>,
    pub total: Option<RawAmount>,
}

// =============================================================================
// Validated Receipt
// =============================================================================

/// A validated receipt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Description as submitted (not yet trimmed).
    pub short_description: String,
    pub price: Money,
}

/// A receipt that passed validation and can be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,

    /// Kept as the submitted `YYYY-MM-DD` text; the odd-day rule reads its
    /// final character.
    pub purchase_date: String,

    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Money,
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// The record kept by the store once a receipt has been scored.
///
/// Created exactly once per successful processing call and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredReceipt {
    /// Opaque identifier (UUID v4, hyphenated).
    pub id: String,
    pub points: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_reads_camel_case_keys() {
        let payload: ReceiptPayload = serde_json::from_value(json!({
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        }))
        .unwrap();

        assert_eq!(payload.retailer.as_deref(), Some("Walgreens"));
        assert_eq!(payload.purchase_date.as_deref(), Some("2022-01-02"));
        assert_eq!(payload.purchase_time.as_deref(), Some("08:13"));
        assert_eq!(payload.total, Some(RawAmount::from("2.65")));
        assert_eq!(payload.items.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_absent_fields_deserialize_as_none() {
        let payload: ReceiptPayload =
            serde_json::from_value(json!({"retailer": "Target", "items": [{}]})).unwrap();

        assert!(payload.total.is_none());
        assert!(payload.purchase_date.is_none());
        let items = payload.items.unwrap();
        assert_eq!(items[0], ItemPayload::default());
    }

    #[test]
    fn test_numeric_amounts_are_kept_as_text() {
        let item: ItemPayload =
            serde_json::from_value(json!({"shortDescription": "Dasani", "price": 1.4})).unwrap();
        assert_eq!(item.price.unwrap().as_str(), "1.4");

        let item: ItemPayload =
            serde_json::from_value(json!({"shortDescription": "Dasani", "price": 12})).unwrap();
        assert_eq!(item.price.unwrap().as_str(), "12");
    }

    #[test]
    fn test_amount_of_wrong_json_type_is_rejected() {
        let result: Result<ItemPayload, _> =
            serde_json::from_value(json!({"shortDescription": "Dasani", "price": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_scored_receipt_serialization() {
        let scored = ScoredReceipt {
            id: "7fb1377b-b223-49d9-a31a-5a02701dd310".to_string(),
            points: 32,
        };
        assert_eq!(
            serde_json::to_value(&scored).unwrap(),
            json!({"id": "7fb1377b-b223-49d9-a31a-5a02701dd310", "points": 32})
        );
    }
}
