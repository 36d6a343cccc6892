use crate::domain::ports::{AcquirerBox, TransactionLedgerBox};
use crate::domain::transaction::{Authorization, Transaction, TransactionId, TransactionRecord};
use crate::domain::validation::validate_card_details;
use crate::error::{PaymentError, Result};

/// The entry point for authorizing card charges.
///
/// `PaymentProcessor` validates a charge, asks the acquirer for a decision and
/// records the decided transaction in the ledger. It holds no state of its own,
/// so a single instance can be shared between concurrent request handlers.
pub struct PaymentProcessor {
    ledger: TransactionLedgerBox,
    acquirer: AcquirerBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor`.
    ///
    /// # Arguments
    ///
    /// * `ledger` - Where decided transactions are recorded and ids come from.
    /// * `acquirer` - The authority that approves or denies a card.
    pub fn new(ledger: TransactionLedgerBox, acquirer: AcquirerBox) -> Self {
        Self { ledger, acquirer }
    }

    /// Validates, authorizes and records a charge.
    ///
    /// A request that fails validation returns `ValidationFailed` with every
    /// failing field; it consumes no id and leaves the ledger untouched.
    pub async fn process(&self, mut tx: Transaction) -> Result<Authorization> {
        let errors = validate_card_details(&tx);
        if !errors.is_empty() {
            tracing::debug!(
                merchant_id = %tx.merchant_id,
                fields = %errors,
                "charge rejected by validation"
            );
            return Err(PaymentError::ValidationFailed(errors));
        }

        let status = self.acquirer.authorize(&tx.card_number);
        tx.status = Some(status);

        let merchant_id = tx.merchant_id.clone();
        let transaction_id = self.ledger.append(tx).await?;

        tracing::info!(
            transaction_id = %transaction_id,
            merchant_id = %merchant_id,
            status = %status,
            "charge authorized"
        );

        Ok(Authorization {
            transaction_id,
            status,
        })
    }

    /// Looks up a recorded transaction by its id.
    pub async fn lookup(&self, id: &TransactionId) -> Result<Option<TransactionRecord>> {
        let record = self.ledger.get(id).await?.map(|transaction| TransactionRecord {
            transaction_id: id.clone(),
            transaction,
        });
        Ok(record)
    }

    /// Number of transactions recorded so far.
    pub async fn recorded(&self) -> Result<usize> {
        self.ledger.count().await
    }
}
