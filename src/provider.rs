//! Payment providers the facade dispatches to.
//!
//! Each provider is a stateless stub that formats a confirmation string.

use crate::amount::Amount;

/// A single payment-making capability.
///
/// Implementations must be stateless or internally synchronized; the facade
/// shares them across callers without locking.
pub trait PaymentProvider: Send + Sync {
    /// Human-readable provider name, embedded in confirmations.
    fn name(&self) -> &'static str;

    /// Makes a payment and returns its confirmation. Never fails.
    fn make_payment(&self, amount: Amount) -> String {
        format!("Payment made using {}: ${}", self.name(), amount)
    }
}

/// PayPal-backed gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalGateway;

impl PaymentProvider for PayPalGateway {
    fn name(&self) -> &'static str {
        "PayPal"
    }
}

/// Stripe-backed gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripeGateway;

impl PaymentProvider for StripeGateway {
    fn name(&self) -> &'static str {
        "Stripe"
    }
}
