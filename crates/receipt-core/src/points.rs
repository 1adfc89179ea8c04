//! # Points Calculator
//!
//! Scores a validated [`Receipt`]. Pure, deterministic, no side effects.
//!
//! ## Rules (additive)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule               Condition                          Points           │
//! │  ─────────────────  ─────────────────────────────────  ───────────────  │
//! │  retailer           each ASCII letter/digit in name    +1 each          │
//! │  round_dollar       total has no cents                 +50              │
//! │  quarter_multiple   total % $0.25 == 0                 +25              │
//! │  item_pairs         every two items                    +5 per pair      │
//! │  descriptions       trimmed length % 3 == 0            +ceil(price×0.2) │
//! │  odd_day            last char of date is odd digit     +6               │
//! │  afternoon          14:00 < time < 16:00               +10              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use receipt_core::points::breakdown;
//! use receipt_core::types::{ItemPayload, ReceiptPayload};
//! use receipt_core::validation::validate_receipt;
//!
//! let receipt = validate_receipt(ReceiptPayload {
//!     retailer: Some("Target".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     items: Some(vec![ItemPayload::new("Emils Cheese Pizza", "12.25")]),
//!     total: Some("12.25".into()),
//! })
//! .unwrap();
//!
//! let points = breakdown(&receipt);
//! assert_eq!(points.retailer, 6);
//! assert_eq!(points.quarter_multiple, 25);
//! assert_eq!(points.descriptions, 3);
//! assert_eq!(points.odd_day, 6);
//! assert_eq!(points.total(), 40);
//! ```

use chrono::Timelike;
use serde::Serialize;

use crate::money::Money;
use crate::types::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const QUARTER_CENTS: i64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(self.retailer, u64::saturating_add)
    }
}

/// Computes the points for a receipt.
pub fn calculate(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

/// Computes each rule's contribution separately.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: round_dollar_points(receipt.total),
        quarter_multiple: quarter_multiple_points(receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(receipt.purchase_time.hour(), receipt.purchase_time.minute()),
    }
}

// =============================================================================
// Rules
// =============================================================================

/// One point per ASCII letter or digit; everything else is ignored.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: Money) -> u64 {
    if total.is_whole_dollars() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER_CENTS) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// `ceil(price × 0.2)` when the trimmed description length is a multiple
/// of three. Length counts UTF-16 code units, so characters outside the
/// Basic Multilingual Plane count twice.
fn description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().encode_utf16().count();
    if length > 0 && length % DESCRIPTION_LENGTH_MULTIPLE == 0 {
        item.price.fifth_rounded_up().max(0) as u64
    } else {
        0
    }
}

/// Reads only the final character of the date text, not the calendar day.
fn odd_day_points(purchase_date: &str) -> u64 {
    match purchase_date.chars().last().and_then(|c| c.to_digit(10)) {
        Some(digit) if digit % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Strictly after 14:00 and strictly before 16:00.
fn afternoon_points(hour: u32, minute: u32) -> u64 {
    let after_two = hour > 14 || (hour == 14 && minute > 0);
    if after_two && hour < 16 {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
