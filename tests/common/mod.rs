#![allow(dead_code)]

use payment_authorizer::application::processor::PaymentProcessor;
use payment_authorizer::domain::transaction::Transaction;
use payment_authorizer::infrastructure::acquirer::SimulatedAcquirer;
use payment_authorizer::infrastructure::in_memory::InMemoryLedger;
use rand::Rng;
use std::io::{Error, Write};

pub fn processor() -> PaymentProcessor {
    PaymentProcessor::new(
        Box::new(InMemoryLedger::new()),
        Box::new(SimulatedAcquirer::new()),
    )
}

pub fn valid_charge(card_number: &str) -> Transaction {
    Transaction {
        card_number: card_number.to_string(),
        expiry_date: "0424".to_string(),
        cvv: "123".to_string(),
        amount: "100.50".to_string(),
        currency: "USD".to_string(),
        merchant_id: "123456".to_string(),
        status: None,
    }
}

/// Check digit that makes `payload` followed by it a valid Luhn number,
/// computed the textbook way: right to left, doubling every second digit
/// starting with the rightmost payload digit.
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Random card number of `len` digits (len >= 1) that passes the Luhn check.
pub fn random_valid_card<R: Rng>(rng: &mut R, len: usize) -> String {
    let payload: Vec<u8> = (0..len - 1).map(|_| rng.gen_range(0..10)).collect();
    let check = luhn_check_digit(&payload);
    payload
        .iter()
        .chain(std::iter::once(&check))
        .map(|d| char::from(b'0' + d))
        .collect()
}

/// Random valid card number whose last digit has the requested parity.
pub fn random_valid_card_ending<R: Rng>(rng: &mut R, len: usize, even: bool) -> String {
    loop {
        let card = random_valid_card(rng, len);
        let last = card.as_bytes()[len - 1] - b'0';
        if (last % 2 == 0) == even {
            return card;
        }
    }
}

pub fn write_requests_csv<W: Write>(sink: W, rows: &[[&str; 6]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(sink);
    wtr.write_record([
        "cardNumber",
        "expiryDate",
        "cvv",
        "amount",
        "currency",
        "merchantId",
    ])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
