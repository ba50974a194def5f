//! The payment gateway facade.
//!
//! One entry point that picks a provider by method key and forwards the
//! amount. Unknown keys produce a plain failure message rather than a panic
//! or a signaled error.

use crate::amount::Amount;
use crate::error::{FacadeError, Result};
use crate::provider::{PayPalGateway, PaymentProvider, StripeGateway};
use crate::request::{BatchSummary, PaymentRecord};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::collections::HashMap;
use std::io::{Read, Write};

/// Method key for the PayPal provider.
pub const PAYPAL: &str = "paypal";

/// Method key for the Stripe provider.
pub const STRIPE: &str = "stripe";

/// Simplified front for the registered payment providers.
///
/// Owns one instance of each provider for its whole lifetime. Keys are
/// matched exactly: no trimming, no case folding.
///
/// # Example
///
/// ```
/// use payment_gateway_facade::{Amount, PaymentGatewayFacade};
///
/// let gateway = PaymentGatewayFacade::new();
/// assert_eq!(
///     gateway.process_payment("paypal", Amount::from(100)),
///     "Payment made using PayPal: $100"
/// );
/// assert_eq!(
///     gateway.process_payment("bitcoin", Amount::from(50)),
///     "Invalid payment method: bitcoin"
/// );
/// ```
pub struct PaymentGatewayFacade {
    providers: HashMap<String, Box<dyn PaymentProvider>>,
}

impl PaymentGatewayFacade {
    /// Creates a facade with the PayPal and Stripe providers registered.
    pub fn new() -> Self {
        let mut facade = PaymentGatewayFacade {
            providers: HashMap::new(),
        };
        facade.register(PAYPAL, PayPalGateway);
        facade.register(STRIPE, StripeGateway);
        facade
    }

    /// Registers a provider under `method`.
    ///
    /// Returns `false` and leaves the existing provider in place if the key
    /// is already taken.
    pub fn register<P>(&mut self, method: impl Into<String>, provider: P) -> bool
    where
        P: PaymentProvider + 'static,
    {
        let method = method.into();
        if self.providers.contains_key(&method) {
            warn!("Provider for method '{}' already registered, ignoring", method);
            return false;
        }
        debug!("Registered {} for method '{}'", provider.name(), method);
        self.providers.insert(method, Box::new(provider));
        true
    }

    /// Registered method keys in ascending order.
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<_> = self.providers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    /// Returns `true` if a provider is registered under `method`.
    pub fn supports(&self, method: &str) -> bool {
        self.providers.contains_key(method)
    }

    /// Dispatches a payment, reporting an unknown method as an error.
    ///
    /// The error's `Display` output is the exact text
    /// [`process_payment`](Self::process_payment) returns.
    pub fn try_process_payment(&self, method: &str, amount: Amount) -> Result<String> {
        let provider = match self.providers.get(method) {
            Some(provider) => provider,
            None => {
                warn!("No provider for payment method '{}'", method);
                return Err(FacadeError::UnknownMethod(method.to_string()));
            }
        };

        if amount.is_negative() {
            warn!(
                "Forwarding negative amount {} to {}",
                amount,
                provider.name()
            );
        }

        debug!("Dispatching {} via '{}' to {}", amount, method, provider.name());
        Ok(provider.make_payment(amount))
    }

    /// Dispatches a payment and always returns a message.
    ///
    /// On success this is the provider's confirmation; for an unknown method
    /// it is `"Invalid payment method: <method>"`.
    pub fn process_payment(&self, method: &str, amount: Amount) -> String {
        self.try_process_payment(method, amount)
            .unwrap_or_else(|e| e.to_string())
    }

    /// Processes payment requests from a CSV reader in streaming fashion.
    ///
    /// Input has a `method,amount` header. Each dispatched row is written to
    /// `writer` as `method,amount,result` in input order. Rows that cannot be
    /// read or carry no usable amount are logged at warn level and skipped.
    pub fn process_csv<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<BatchSummary> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["method", "amount", "result"])?;

        let mut summary = BatchSummary::default();

        for (row_idx, result) in csv_reader.deserialize::<PaymentRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let request = match result {
                Ok(record) => match record.parse() {
                    Some(request) => request,
                    None => {
                        warn!("Row {}: Missing or invalid amount, skipping", row_num);
                        summary.skipped += 1;
                        continue;
                    }
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let outcome = match self.try_process_payment(&request.method, request.amount) {
                Ok(confirmation) => {
                    summary.succeeded += 1;
                    confirmation
                }
                Err(e) => {
                    summary.rejected += 1;
                    e.to_string()
                }
            };
            summary.processed += 1;

            let amount = request.amount.to_string();
            csv_writer.write_record([request.method.as_str(), amount.as_str(), outcome.as_str()])?;
        }

        csv_writer.flush()?;
        debug!(
            "Batch done: {} processed, {} succeeded, {} rejected, {} skipped",
            summary.processed, summary.succeeded, summary.rejected, summary.skipped
        );
        Ok(summary)
    }
}

impl Default for PaymentGatewayFacade {
    fn default() -> Self {
        Self::new()
    }
}
