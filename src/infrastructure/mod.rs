//! Adapters implementing the domain ports.

pub mod acquirer;
pub mod in_memory;
