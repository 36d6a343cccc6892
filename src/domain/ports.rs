use super::transaction::{AuthorizationStatus, Transaction, TransactionId};
use crate::error::Result;
use async_trait::async_trait;

/// Decides whether a charge on a card is approved.
pub trait Acquirer: Send + Sync {
    fn authorize(&self, card_number: &str) -> AuthorizationStatus;
}

/// Store of recorded transactions and issuer of their ids.
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    /// Returns the current counter value as an id and advances the counter.
    async fn next_id(&self) -> Result<TransactionId>;

    /// Inserts `tx` under `id`, replacing any existing record.
    async fn record(&self, id: TransactionId, tx: Transaction) -> Result<()>;

    /// Issues a fresh id and records `tx` under it as one atomic step.
    ///
    /// Fails with `InternalInconsistency` instead of overwriting if the issued
    /// id already names a record.
    async fn append(&self, tx: Transaction) -> Result<TransactionId>;

    async fn get(&self, id: &TransactionId) -> Result<Option<Transaction>>;

    async fn count(&self) -> Result<usize>;
}

pub type AcquirerBox = Box<dyn Acquirer>;
pub type TransactionLedgerBox = Box<dyn TransactionLedger>;
