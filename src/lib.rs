//! Diagnostic client for a remote PG problem renderer.
//!
//! `pg-lint` posts a local problem file and prints either the renderer's
//! diagnostics or the rendered markup; `pg-smoke` renders a server-side
//! problem and checks the result looks like a problem page.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
