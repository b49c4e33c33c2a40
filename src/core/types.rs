use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, month_day_label};
use crate::error::GraphResult;

/// Drawing rectangle handed to the engine, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphFrame {
    pub width: f64,
    pub height: f64,
}

impl GraphFrame {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One sample of the series. Insertion order is time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphValue {
    pub value: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl GraphValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    #[must_use]
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    pub fn from_decimal(value: Decimal, label: Option<String>) -> GraphResult<Self> {
        Ok(Self {
            value: decimal_to_f64(value, "value")?,
            label,
        })
    }

    /// Labels the value with its calendar day (`M.DD`).
    #[must_use]
    pub fn dated(value: f64, date: NaiveDate) -> Self {
        Self {
            value,
            label: Some(month_day_label(date)),
        }
    }
}
