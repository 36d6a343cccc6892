//! Boundaries that turn external input into `Transaction` values and render
//! the processor's results.

pub mod csv;
pub mod http;
