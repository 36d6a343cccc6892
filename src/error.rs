use crate::domain::validation::ValidationErrors;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    /// One or more request fields failed validation. Nothing was recorded.
    #[error("Invalid card details: {0}")]
    #[diagnostic(code(payment::validation_failed))]
    ValidationFailed(ValidationErrors),

    /// The ledger handed out an id that already names a record.
    #[error("Internal inconsistency: {0}")]
    #[diagnostic(
        code(payment::internal_inconsistency),
        help("transaction ids must only be issued by the ledger")
    )]
    InternalInconsistency(String),

    #[error("CSV error: {0}")]
    #[diagnostic(code(payment::csv))]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(payment::io))]
    Io(#[from] std::io::Error),
}
