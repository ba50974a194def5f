//! # Payment Gateway Facade
//!
//! A single entry point for making payments through interchangeable
//! gateway providers.
//!
//! ## Design Principles
//!
//! - **One operation**: callers only see `process_payment(method, amount)`
//! - **Lookup dispatch**: method keys map to boxed `PaymentProvider`s
//! - **Soft failure**: unknown methods yield a message, not a panic
//! - **Exact amounts**: decimal amounts via `rust_decimal`, printed without trailing zeros
//!
//! ## Example
//!
//! ```
//! use payment_gateway_facade::{Amount, PaymentGatewayFacade};
//!
//! let gateway = PaymentGatewayFacade::new();
//! println!("{}", gateway.process_payment("stripe", Amount::from(150)));
//! ```

pub mod amount;
pub mod error;
pub mod facade;
pub mod provider;
pub mod request;

pub use amount::Amount;
pub use error::{FacadeError, Result};
pub use facade::{PaymentGatewayFacade, PAYPAL, STRIPE};
pub use provider::{PayPalGateway, PaymentProvider, StripeGateway};
pub use request::{BatchSummary, PaymentRecord, PaymentRequest};
