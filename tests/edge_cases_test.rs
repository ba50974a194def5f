//! Edge case tests for payment dispatch through the facade.

use payment_gateway_facade::{Amount, FacadeError, PaymentGatewayFacade, PaymentProvider};
use std::str::FromStr;
use std::sync::Arc;
use std::thread;

fn amount(s: &str) -> Amount {
    Amount::from_str(s).unwrap()
}

fn sample_amounts() -> Vec<Amount> {
    ["0", "1", "100", "150", "0.01", "10.5", "-42", "999999999999.9999"]
        .iter()
        .map(|s| amount(s))
        .collect()
}

// ==================== SUPPORTED METHODS ====================

#[test]
fn test_supported_methods_embed_amount_and_provider_name() {
    let gateway = PaymentGatewayFacade::new();

    for (method, name) in [("paypal", "PayPal"), ("stripe", "Stripe")] {
        for a in sample_amounts() {
            let result = gateway.process_payment(method, a);
            assert!(result.contains(name), "{} missing from {}", name, result);
            assert!(
                result.contains(&a.to_string()),
                "{} missing from {}",
                a,
                result
            );
        }
    }
}

#[test]
fn test_exact_confirmation_text() {
    let gateway = PaymentGatewayFacade::new();

    assert_eq!(
        gateway.process_payment("paypal", Amount::from(100)),
        "Payment made using PayPal: $100"
    );
    assert_eq!(
        gateway.process_payment("stripe", Amount::from(150)),
        "Payment made using Stripe: $150"
    );
}

#[test]
fn test_zero_and_negative_amounts_pass_through() {
    let gateway = PaymentGatewayFacade::new();

    assert_eq!(
        gateway.process_payment("paypal", Amount::ZERO),
        "Payment made using PayPal: $0"
    );
    assert_eq!(
        gateway.process_payment("stripe", amount("-7.25")),
        "Payment made using Stripe: $-7.25"
    );
}

#[test]
fn test_trailing_zeros_are_not_printed() {
    let gateway = PaymentGatewayFacade::new();

    assert_eq!(
        gateway.process_payment("paypal", amount("100.00")),
        "Payment made using PayPal: $100"
    );
    assert_eq!(
        gateway.process_payment("paypal", amount("0.50")),
        "Payment made using PayPal: $0.5"
    );
}

// ==================== UNKNOWN METHODS ====================

#[test]
fn test_unknown_method_message_is_independent_of_amount() {
    let gateway = PaymentGatewayFacade::new();

    for method in ["bitcoin", "", "visa", "paypal2", "stripe "] {
        for a in sample_amounts() {
            assert_eq!(
                gateway.process_payment(method, a),
                format!("Invalid payment method: {}", method)
            );
        }
    }
}

#[test]
fn test_bitcoin_is_rejected() {
    let gateway = PaymentGatewayFacade::new();
    assert_eq!(
        gateway.process_payment("bitcoin", Amount::from(50)),
        "Invalid payment method: bitcoin"
    );
}

#[test]
fn test_empty_method_is_rejected() {
    let gateway = PaymentGatewayFacade::new();
    assert_eq!(
        gateway.process_payment("", Amount::from(0)),
        "Invalid payment method: "
    );
}

#[test]
fn test_matching_is_case_sensitive() {
    let gateway = PaymentGatewayFacade::new();

    for method in ["PayPal", "PAYPAL", "Stripe", "STRIPE"] {
        assert_eq!(
            gateway.process_payment(method, Amount::from(100)),
            format!("Invalid payment method: {}", method)
        );
    }
}

#[test]
fn test_method_is_not_trimmed() {
    let gateway = PaymentGatewayFacade::new();
    assert_eq!(
        gateway.process_payment(" paypal", Amount::from(1)),
        "Invalid payment method:  paypal"
    );
}

// ==================== STRUCTURED RESULT ====================

#[test]
fn test_try_process_payment_matches_string_api() {
    let gateway = PaymentGatewayFacade::new();

    for method in ["paypal", "stripe", "bitcoin", ""] {
        let a = Amount::from(25);
        let structured = gateway
            .try_process_payment(method, a)
            .unwrap_or_else(|e| e.to_string());
        assert_eq!(structured, gateway.process_payment(method, a));
    }
}

#[test]
fn test_try_process_payment_error_variant() {
    let gateway = PaymentGatewayFacade::new();

    let err = gateway
        .try_process_payment("PayPal", Amount::from(100))
        .unwrap_err();
    assert!(matches!(err, FacadeError::UnknownMethod(ref m) if m == "PayPal"));
    assert_eq!(err.to_string(), "Invalid payment method: PayPal");
}

// ==================== PURITY & SHARING ====================

#[test]
fn test_dispatch_is_idempotent() {
    let gateway = PaymentGatewayFacade::new();

    for method in ["paypal", "stripe", "bitcoin"] {
        let first = gateway.process_payment(method, amount("12.34"));
        let second = gateway.process_payment(method, amount("12.34"));
        assert_eq!(first, second);
    }
}

#[test]
fn test_concurrent_callers_share_one_facade() {
    let gateway = Arc::new(PaymentGatewayFacade::new());

    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            let gateway = Arc::clone(&gateway);
            thread::spawn(move || {
                let method = if i % 2 == 0 { "paypal" } else { "stripe" };
                gateway.process_payment(method, Amount::from(i))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        let name = if i % 2 == 0 { "PayPal" } else { "Stripe" };
        assert_eq!(result, format!("Payment made using {}: ${}", name, i));
    }
}

// ==================== EXTENSION ====================

struct ApplePay;

impl PaymentProvider for ApplePay {
    fn name(&self) -> &'static str {
        "Apple Pay"
    }
}

#[test]
fn test_registered_provider_uses_default_confirmation() {
    let mut gateway = PaymentGatewayFacade::new();
    assert!(gateway.register("applepay", ApplePay));

    assert_eq!(
        gateway.process_payment("applepay", Amount::from(30)),
        "Payment made using Apple Pay: $30"
    );
    assert_eq!(
        gateway.process_payment("paypal", Amount::from(30)),
        "Payment made using PayPal: $30"
    );
}
