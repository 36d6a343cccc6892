//! Shallow validation of charge requests.
//!
//! The checks here are intentionally superficial: the expiry date and CVV are
//! only length-checked, the amount only has to parse as a float. Every field is
//! checked and every failure is reported; nothing short-circuits.

use super::transaction::Transaction;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Request fields that can fail validation, keyed by their wire names.
#[derive(Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CardNumber,
    ExpiryDate,
    Cvv,
    Amount,
    Currency,
    MerchantId,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CardNumber => "cardNumber",
            Field::ExpiryDate => "expiryDate",
            Field::Cvv => "cvv",
            Field::Amount => "amount",
            Field::Currency => "currency",
            Field::MerchantId => "merchantId",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed validation failures. Empty means the request is valid.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// Validates every field of a charge request.
///
/// Returns the collected errors; the request is valid iff the result is empty.
pub fn validate_card_details(tx: &Transaction) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !check_luhn(&tx.card_number) {
        errors.add(Field::CardNumber, "Invalid card number");
    }

    // Lengths are in bytes; no date or digit checks on purpose.
    if tx.expiry_date.len() != 4 {
        errors.add(Field::ExpiryDate, "Invalid expire date");
    }

    if tx.cvv.len() != 3 {
        errors.add(Field::Cvv, "Invalid cvv");
    }

    if !is_valid_amount(&tx.amount) {
        errors.add(Field::Amount, "Invalid amount");
    }

    if tx.currency.is_empty() {
        errors.add(Field::Currency, "Invalid currency");
    }

    if tx.merchant_id.is_empty() {
        errors.add(Field::MerchantId, "Invalid merchant Id");
    }

    errors
}

/// Luhn check-digit test over the raw card number.
///
/// Walks the bytes left to right, using the length parity to double every
/// second digit counted from the right. A byte that is not an ASCII digit
/// counts as `0`. The empty string has a sum of zero and therefore passes.
pub fn check_luhn(card_number: &str) -> bool {
    let parity = card_number.len() & 1;

    let sum: u64 = card_number
        .bytes()
        .enumerate()
        .map(|(i, byte)| {
            let mut digit = if byte.is_ascii_digit() {
                u64::from(byte - b'0')
            } else {
                0
            };
            if (i & 1) ^ parity == 0 {
                digit *= 2;
                if digit > 9 {
                    digit -= 9;
                }
            }
            digit
        })
        .sum();

    sum % 10 == 0
}

/// The amount must parse as an `f64`. Literals that overflow to infinity are
/// rejected; explicit `inf`/`infinity` spellings are accepted.
fn is_valid_amount(amount: &str) -> bool {
    match amount.parse::<f64>() {
        Ok(value) if value.is_infinite() => {
            let literal = amount.trim_start_matches(['+', '-']).to_ascii_lowercase();
            literal == "inf" || literal == "infinity"
        }
        Ok(_) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_transaction() -> Transaction {
        Transaction {
            card_number: "4532015112830366".to_string(),
            expiry_date: "0424".to_string(),
            cvv: "123".to_string(),
            amount: "100.50".to_string(),
            currency: "USD".to_string(),
            merchant_id: "123456".to_string(),
            status: None,
        }
    }

    #[test]
    fn test_check_luhn_known_values() {
        assert!(check_luhn("4532015112830366"));
        assert!(check_luhn("79927398713"));
        assert!(check_luhn("0"));
        assert!(!check_luhn("1234"));
        assert!(!check_luhn("4532015112830367"));
    }

    #[test]
    fn test_check_luhn_empty_passes() {
        assert!(check_luhn(""));
    }

    #[test]
    fn test_check_luhn_non_digits_count_as_zero() {
        // "4532015112830366" with a zero swapped for a letter keeps the same sum.
        assert!(check_luhn("4532x15112830366"));
        assert_eq!(
            check_luhn("45320151128303a6"),
            check_luhn("4532015112830306")
        );
        // Separators are not stripped, they shift the parity.
        assert!(!check_luhn("4532 0151 1283 0366"));
    }

    #[test]
    fn test_valid_transaction_has_no_errors() {
        let errors = validate_card_details(&valid_transaction());
        assert!(errors.is_empty(), "unexpected errors: {}", errors);
    }

    #[test]
    fn test_invalid_card_number() {
        let mut tx = valid_transaction();
        tx.card_number = "1234".to_string();

        let errors = validate_card_details(&tx);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::CardNumber), Some("Invalid card number"));
    }

    #[test]
    fn test_every_field_is_reported() {
        let tx = Transaction {
            card_number: "1234".to_string(),
            expiry_date: "04/24".to_string(),
            cvv: "12".to_string(),
            amount: "ten".to_string(),
            currency: String::new(),
            merchant_id: String::new(),
            status: None,
        };

        let errors = validate_card_details(&tx);
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                Field::CardNumber,
                Field::ExpiryDate,
                Field::Cvv,
                Field::Amount,
                Field::Currency,
                Field::MerchantId,
            ]
        );
        assert_eq!(errors.get(Field::ExpiryDate), Some("Invalid expire date"));
        assert_eq!(errors.get(Field::Cvv), Some("Invalid cvv"));
        assert_eq!(errors.get(Field::Amount), Some("Invalid amount"));
        assert_eq!(errors.get(Field::Currency), Some("Invalid currency"));
        assert_eq!(errors.get(Field::MerchantId), Some("Invalid merchant Id"));
    }

    #[test]
    fn test_expiry_and_cvv_are_length_only() {
        let mut tx = valid_transaction();
        tx.expiry_date = "ab99".to_string();
        tx.cvv = "xyz".to_string();
        assert!(validate_card_details(&tx).is_empty());
    }

    #[test]
    fn test_amount_parsing() {
        for ok in ["100", "100.50", "-3", "1e5", ".5", "inf", "-Infinity", "NaN"] {
            assert!(is_valid_amount(ok), "{ok} should parse");
        }
        for bad in ["", "ten", "1,50", "1.2.3", "1e400", " 1", "0x1p4"] {
            assert!(!is_valid_amount(bad), "{bad} should not parse");
        }
    }

    #[test]
    fn test_errors_serialize_as_map() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Cvv, "Invalid cvv");
        errors.add(Field::MerchantId, "Invalid merchant Id");

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"cvv": "Invalid cvv", "merchantId": "Invalid merchant Id"})
        );
        assert_eq!(
            errors.to_string(),
            "cvv: Invalid cvv; merchantId: Invalid merchant Id"
        );
    }
}
