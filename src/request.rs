//! Payment request models for batch CSV input and output.

use crate::amount::Amount;
use serde::Deserialize;
use std::str::FromStr;

/// Raw payment request as read from CSV.
///
/// The amount is kept as text so a malformed value can be reported
/// against its row instead of failing the whole batch.
#[derive(Debug, Deserialize)]
pub struct PaymentRecord {
    /// Method key, e.g. `paypal` or `stripe`. Any string is accepted.
    pub method: String,

    /// Amount text, parsed on demand
    pub amount: Option<String>,
}

impl PaymentRecord {
    /// Parses the raw CSV record into a typed request.
    ///
    /// Returns `None` if the amount is missing, empty or not a number. The
    /// method is carried over verbatim; unknown methods are the facade's call.
    pub fn parse(&self) -> Option<PaymentRequest> {
        let amount = self.parse_amount()?;
        Some(PaymentRequest {
            method: self.method.clone(),
            amount,
        })
    }

    fn parse_amount(&self) -> Option<Amount> {
        let amount_str = self.amount.as_ref()?;
        let trimmed = amount_str.trim();
        if trimmed.is_empty() {
            return None;
        }
        Amount::from_str(trimmed).ok()
    }
}

/// A typed request ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub method: String,
    pub amount: Amount,
}

impl PaymentRequest {
    pub fn new(method: impl Into<String>, amount: Amount) -> Self {
        PaymentRequest {
            method: method.into(),
            amount,
        }
    }
}

/// Counters for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows dispatched to the facade (succeeded + rejected).
    pub processed: usize,

    /// Rows handled by a registered provider.
    pub succeeded: usize,

    /// Rows whose method matched no provider.
    pub rejected: usize,

    /// Rows that could not be read or had no usable amount.
    pub skipped: usize,
}
