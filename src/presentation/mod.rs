//! Presentation layer: what the tools print.

pub mod report;
