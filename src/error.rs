//! Error types for the payment gateway facade.

use thiserror::Error;

/// Result type alias for facade operations
pub type Result<T> = std::result::Result<T, FacadeError>;

/// Errors that can occur while dispatching payments.
#[derive(Error, Debug)]
pub enum FacadeError {
    /// No provider is registered under the requested method key.
    ///
    /// The message is the same text `process_payment` returns for this case.
    #[error("Invalid payment method: {0}")]
    UnknownMethod(String),

    /// Amount text that is not a number
    #[error("Invalid amount '{value}': {message}")]
    InvalidAmount { value: String, message: String },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing command line argument
    #[error("Missing {0} argument. Usage: payment-gateway [<method> <amount> | --batch <input.csv>]")]
    MissingArgument(&'static str),
}
