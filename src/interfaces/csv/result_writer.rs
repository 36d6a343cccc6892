use crate::domain::transaction::{Authorization, AuthorizationStatus, TransactionId};
use crate::error::{PaymentError, Result};
use serde::Serialize;
use std::io::Write;

/// One output row of a batch run.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// 1-based position of the request in the input, header excluded.
    pub row: usize,
    pub transaction_id: Option<TransactionId>,
    pub status: Option<AuthorizationStatus>,
    pub error: Option<String>,
}

impl BatchResult {
    pub fn from_outcome(row: usize, outcome: Result<Authorization>) -> Self {
        match outcome {
            Ok(auth) => Self {
                row,
                transaction_id: Some(auth.transaction_id),
                status: Some(auth.status),
                error: None,
            },
            Err(err) => Self {
                row,
                transaction_id: None,
                status: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Writes batch results as CSV with the header `row,transactionId,status,error`.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, result: &BatchResult) -> Result<()> {
        self.writer.serialize(result)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(PaymentError::from)
    }
}
