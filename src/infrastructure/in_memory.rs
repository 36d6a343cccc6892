use crate::domain::ports::TransactionLedger;
use crate::domain::transaction::{Transaction, TransactionId};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct LedgerState {
    counter: u64,
    transactions: HashMap<TransactionId, Transaction>,
}

impl LedgerState {
    fn issue_id(&mut self) -> TransactionId {
        let id = TransactionId::from(self.counter);
        self.counter += 1;
        id
    }
}

/// A thread-safe in-memory transaction ledger.
///
/// The id counter and the record map live behind a single `Mutex`, so issuing
/// an id and recording under it happen in one critical section. Records are
/// never evicted; the ledger grows for the lifetime of the process.
///
/// `Clone` shares the underlying state.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger whose first id is `"0"`.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionLedger for InMemoryLedger {
    async fn next_id(&self) -> Result<TransactionId> {
        let mut state = self.state.lock().await;
        Ok(state.issue_id())
    }

    async fn record(&self, id: TransactionId, tx: Transaction) -> Result<()> {
        let mut state = self.state.lock().await;
        state.transactions.insert(id, tx);
        Ok(())
    }

    async fn append(&self, tx: Transaction) -> Result<TransactionId> {
        let mut state = self.state.lock().await;
        // The colliding id stays consumed so the next append can succeed.
        let id = state.issue_id();
        if state.transactions.contains_key(&id) {
            return Err(PaymentError::InternalInconsistency(format!(
                "transaction id {} is already recorded",
                id
            )));
        }
        state.transactions.insert(id.clone(), tx);
        Ok(id)
    }

    async fn get(&self, id: &TransactionId) -> Result<Option<Transaction>> {
        let state = self.state.lock().await;
        Ok(state.transactions.get(id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        let state = self.state.lock().await;
        Ok(state.transactions.len())
    }
}
