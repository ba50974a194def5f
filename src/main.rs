//! Payment Gateway CLI
//!
//! A thin client around `PaymentGatewayFacade` that prints each result.
//!
//! # Usage
//!
//! ```bash
//! cargo run                              # demo: paypal 100, stripe 150
//! cargo run -- paypal 100                # one payment
//! cargo run -- --batch payments.csv      # method,amount CSV in, results CSV out
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use payment_gateway_facade::{Amount, FacadeError, PaymentGatewayFacade, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use std::str::FromStr;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let gateway = PaymentGatewayFacade::new();

    match args.first().map(String::as_str) {
        None => {
            client_code(&gateway, "paypal", Amount::from(100));
            client_code(&gateway, "stripe", Amount::from(150));
        }
        Some("--batch") => {
            let input_path = args.get(1).ok_or(FacadeError::MissingArgument("input file"))?;
            let reader = BufReader::new(File::open(input_path)?);

            let stdout = io::stdout();
            let handle = stdout.lock();
            gateway.process_csv(reader, handle)?;
        }
        Some(method) => {
            let raw = args.get(1).ok_or(FacadeError::MissingArgument("amount"))?;
            let amount = Amount::from_str(raw).map_err(|e| FacadeError::InvalidAmount {
                value: raw.clone(),
                message: e.to_string(),
            })?;
            client_code(&gateway, method, amount);
        }
    }

    Ok(())
}

fn client_code(gateway: &PaymentGatewayFacade, method: &str, amount: Amount) {
    println!("{}", gateway.process_payment(method, amount));
}
