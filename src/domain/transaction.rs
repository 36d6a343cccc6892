use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Outcome of the acquirer decision for a charge.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum AuthorizationStatus {
    Approved,
    Denied,
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationStatus::Approved => f.write_str("Approved"),
            AuthorizationStatus::Denied => f.write_str("Denied"),
        }
    }
}

/// Ledger-issued identifier: the decimal form of the ledger counter.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for TransactionId {
    fn from(counter: u64) -> Self {
        Self(counter.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single charge attempt.
///
/// All card and payment fields are kept as the strings the caller sent; the
/// validator only applies shallow checks to them. Fields missing from the
/// input, or sent as `null`, default to empty strings. `status` can never be
/// supplied by a caller and is only set by the processor once the request has
/// passed validation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_empty")]
    pub card_number: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub expiry_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub cvv: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub merchant_id: String,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub status: Option<AuthorizationStatus>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A recorded transaction together with the id the ledger assigned to it.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub transaction_id: TransactionId,
    #[serde(flatten)]
    pub transaction: Transaction,
}

/// Successful result of processing a charge.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    pub transaction_id: TransactionId,
    pub status: AuthorizationStatus,
}
