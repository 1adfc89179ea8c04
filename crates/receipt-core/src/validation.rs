//! # Validation Module
//!
//! Turns a [`ReceiptPayload`] into a [`Receipt`] or a typed
//! [`ValidationError`].
//!
//! ## Validation Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Stages                                  │
//! │                                                                         │
//! │  Stage 1: Top-level presence                                           │
//! │  ├── retailer, purchaseDate, purchaseTime, items, total                │
//! │  └── absent or blank → MissingTopLevelField { fields }                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stage 2: Item presence (in order)                                     │
//! │  ├── shortDescription absent or blank after trim                       │
//! │  ├── price absent                                                      │
//! │  └── → MissingItemField { index, field }                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stage 3: Formats                                                      │
//! │  ├── purchaseDate  YYYY-MM-DD                                          │
//! │  ├── purchaseTime  HH:MM (24-hour)                                     │
//! │  ├── total, items[i].price  plain decimal, ≤ 2 fraction digits         │
//! │  └── → InvalidFormat { field, reason }                                 │
//! │                                                                         │
//! │  The first failing stage wins; nothing is scored on failure.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::types::{ItemPayload, ReceiptPayload};
//! use receipt_core::validation::validate_receipt;
//! use receipt_core::ValidationError;
//!
//! let payload = ReceiptPayload {
//!     retailer: Some("Target".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     items: Some(vec![ItemPayload::new("Mountain Dew 12PK", "6.49")]),
//!     total: None,
//! };
//!
//! let err = validate_receipt(payload).unwrap_err();
//! assert_eq!(err, ValidationError::MissingTopLevelField { fields: vec!["total"] });
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Item, ItemPayload, RawAmount, Receipt, ReceiptPayload};
use crate::{PURCHASE_DATE_FORMAT, PURCHASE_TIME_FORMAT};

/// Validates a submitted receipt.
///
/// ## User Workflow
/// ```text
/// POST /receipts/process
///      │
///      ▼
/// ReceiptPayload (serde) ──► validate_receipt ← THIS FUNCTION
///      │                          │
///      │                          ├── Err(ValidationError) → HTTP 400
///      │                          │
///      ▼                          ▼
///                             Ok(Receipt) → points::calculate
/// ```
pub fn validate_receipt(payload: ReceiptPayload) -> ValidationResult<Receipt> {
    let ReceiptPayload {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    } = payload;

    let retailer = retailer.filter(|s| !s.is_empty());
    let purchase_date = purchase_date.filter(|s| !s.is_empty());
    let purchase_time = purchase_time.filter(|s| !s.is_empty());
    let total = total.filter(|amount| !amount.as_str().is_empty());

    let missing: Vec<&'static str> = [
        ("retailer", retailer.is_none()),
        ("purchaseDate", purchase_date.is_none()),
        ("purchaseTime", purchase_time.is_none()),
        ("items", items.is_none()),
        ("total", total.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();

    let (Some(retailer), Some(purchase_date), Some(purchase_time), Some(items), Some(total)) =
        (retailer, purchase_date, purchase_time, items, total)
    else {
        return Err(ValidationError::MissingTopLevelField { fields: missing });
    };

    // Presence of every item field is checked before any format, so a
    // missing description at index 3 beats a malformed price at index 0.
    let present = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| require_item_fields(index, item))
        .collect::<ValidationResult<Vec<_>>>()?;

    validate_purchase_date(&purchase_date)?;
    let purchase_time = parse_purchase_time(&purchase_time)?;
    let total = parse_amount("total", &total)?;

    let items = present
        .into_iter()
        .enumerate()
        .map(|(index, (short_description, price))| {
            Ok(Item {
                short_description,
                price: parse_amount(&format!("items[{index}].price"), &price)?,
            })
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

impl TryFrom<ReceiptPayload> for Receipt {
    type Error = ValidationError;

    fn try_from(payload: ReceiptPayload) -> Result<Self, Self::Error> {
        validate_receipt(payload)
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Checks that an item carries a non-blank description and a price.
fn require_item_fields(index: usize, item: ItemPayload) -> ValidationResult<(String, RawAmount)> {
    let short_description = item
        .short_description
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::MissingItemField {
            index,
            field: "shortDescription",
        })?;

    let price = item.price.ok_or(ValidationError::MissingItemField {
        index,
        field: "price",
    })?;

    Ok((short_description, price))
}

/// Validates the `YYYY-MM-DD` layout of a purchase date.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2022-03-20").is_ok());
/// assert!(validate_purchase_date("2022-02-30").is_err());
/// assert!(validate_purchase_date("03/20/2022").is_err());
/// ```
pub fn validate_purchase_date(text: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(text, PURCHASE_DATE_FORMAT).map_err(|e| {
        ValidationError::invalid_format("purchaseDate", format!("expected YYYY-MM-DD ({e})"))
    })
}

/// Parses a 24-hour `HH:MM` purchase time.
///
/// ## Example
/// ```rust
/// use chrono::Timelike;
/// use receipt_core::validation::parse_purchase_time;
///
/// let time = parse_purchase_time("14:33").unwrap();
/// assert_eq!((time.hour(), time.minute()), (14, 33));
/// assert!(parse_purchase_time("2:33pm").is_err());
/// assert!(parse_purchase_time("24:00").is_err());
/// ```
pub fn parse_purchase_time(text: &str) -> ValidationResult<NaiveTime> {
    NaiveTime::parse_from_str(text, PURCHASE_TIME_FORMAT).map_err(|e| {
        ValidationError::invalid_format("purchaseTime", format!("expected HH:MM ({e})"))
    })
}

/// Parses an amount, naming `field` in the error.
fn parse_amount(field: &str, amount: &RawAmount) -> ValidationResult<Money> {
    Money::parse(amount.as_str()).map_err(|e| match e {
        ValidationError::InvalidFormat { reason, .. } => {
            ValidationError::invalid_format(field, reason)
        }
        other => other,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
