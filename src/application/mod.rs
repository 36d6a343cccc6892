//! Application layer orchestrating the authorization of a charge.
//!
//! This module defines the `PaymentProcessor`, which composes validation, the
//! acquirer decision and the ledger into the single `process` operation used by
//! both the HTTP server and the batch CLI.

pub mod processor;
