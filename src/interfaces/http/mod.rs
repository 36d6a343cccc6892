//! HTTP interface.
//!
//! | Method | Path                 | Description                         |
//! |--------|----------------------|-------------------------------------|
//! | GET    | `/`                  | Liveness greeting                   |
//! | POST   | `/`                  | Authorize a card charge             |
//! | GET    | `/transactions/:id`  | Look up a recorded transaction      |
//!
//! Charge bodies are decoded as JSON whatever the `Content-Type` header says.
//! Bodies that cannot be decoded into a charge never reach the processor; they
//! are answered with `400 {"error": <parser message>}`.

mod error;

pub use error::ApiError;

use crate::application::processor::PaymentProcessor;
use crate::domain::transaction::{Authorization, Transaction, TransactionId, TransactionRecord};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<PaymentProcessor>,
}

impl AppState {
    pub fn new(processor: PaymentProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}

/// Builds the router with all routes and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello).post(process_payment))
        .route("/transactions/:id", get(get_transaction))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello, World!"
}

async fn process_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Authorization>, ApiError> {
    let tx: Transaction =
        serde_json::from_slice(&body).map_err(|err| ApiError::MalformedInput(err.to_string()))?;
    let authorization = state.processor.process(tx).await?;
    Ok(Json(authorization))
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransactionRecord>, ApiError> {
    let id = TransactionId::from(id);
    state
        .processor
        .lookup(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}
