//! Response interpretation: diagnostic extraction and error flagging.
//!
//! Message collection and error flagging are deliberately independent. A
//! response can be flagged as an error without yielding a single message, and
//! markup-derived messages never flag an error on their own.

pub mod markup;
pub mod normalize;

use tracing::debug;

use crate::domain::RenderResponse;

pub use normalize::{coerce_messages, display_value, is_truthy};

/// Top-level diagnostic fields in priority order.
pub const TOP_LEVEL_FIELDS: [&str; 5] = ["errors", "warnings", "error", "warning", "message"];
/// Fields of the `debug` mapping, read after the top-level ones.
pub const DEBUG_FIELDS: [&str; 3] = ["pg_warn", "internal", "debug"];

/// Messages and error verdict for one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    messages: Vec<String>,
    is_error: bool,
}

impl DiagnosticReport {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpreter {
    markup_fallback: bool,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self {
            markup_fallback: true,
        }
    }
}

impl Interpreter {
    /// Interpreter that never mines rendered markup for diagnostics.
    pub fn structured_only() -> Self {
        Self {
            markup_fallback: false,
        }
    }

    pub fn collect_messages(&self, response: &RenderResponse) -> Vec<String> {
        let mut messages = structured_messages(response);
        if !messages.is_empty() || !self.markup_fallback {
            return messages;
        }

        if let Some(html) = response.rendered_html() {
            messages = markup::scan(html);
            debug!(
                count = messages.len(),
                "no structured diagnostics; scanned rendered markup"
            );
        }
        messages
    }

    pub fn report(&self, response: &RenderResponse) -> DiagnosticReport {
        DiagnosticReport {
            messages: self.collect_messages(response),
            is_error: is_error(response),
        }
    }
}

/// Collect diagnostics with the markup fallback enabled.
pub fn collect_messages(response: &RenderResponse) -> Vec<String> {
    Interpreter::default().collect_messages(response)
}

/// Whether the renderer flagged the response as an error.
pub fn is_error(response: &RenderResponse) -> bool {
    is_truthy(response.section_field("flags", "error_flag"))
        || is_truthy(response.field("errors"))
        || is_truthy(response.field("error"))
}

fn structured_messages(response: &RenderResponse) -> Vec<String> {
    let top_level = TOP_LEVEL_FIELDS
        .iter()
        .map(|key| response.field(key));
    let debug_section = DEBUG_FIELDS
        .iter()
        .map(|key| response.section_field("debug", key));

    top_level
        .chain(debug_section)
        .flat_map(coerce_messages)
        .collect()
}
