use crate::domain::transaction::Transaction;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads charge requests from CSV.
///
/// Expects the headers `cardNumber,expiryDate,cvv,amount,currency,merchantId`.
/// Whitespace around fields is trimmed. Rows shorter than the header are padded
/// with empty fields, so a missing column reaches validation as an empty value.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads the header row, then yields one charge request per data row.
    ///
    /// Fails up front only if the header row itself cannot be read.
    pub fn requests(mut self) -> Result<impl Iterator<Item = Result<Transaction>>> {
        let headers = self.reader.headers()?.clone();
        let width = headers.len();

        let requests = self.reader.into_records().map(move |result| {
            let mut record = result?;
            while record.len() < width {
                record.push_field("");
            }
            record
                .deserialize::<Transaction>(Some(&headers))
                .map_err(PaymentError::from)
        });
        Ok(requests)
    }
}
