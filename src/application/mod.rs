//! Application layer: response interpretation, redaction and the tool workflows.

pub mod error;
pub mod interpret;
pub mod lint;
pub mod redact;
pub mod smoke;
