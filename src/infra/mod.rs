//! Infrastructure adapters: HTTP transport, randomness and logging bootstrap.

pub mod client;
pub mod entropy;
pub mod error;
pub mod telemetry;
