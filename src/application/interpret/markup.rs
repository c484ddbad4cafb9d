//! Heuristic diagnostics mined from rendered markup.
//!
//! This is a regex pass over the raw HTML, not a DOM parse, so it keeps
//! working on truncated or malformed pages.

use once_cell::sync::Lazy;
use regex::Regex;

static ERROR_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)id=['"]error-block['"][^>]*text="([^"]+)""#)
        .expect("error-block pattern is valid")
});

/// Section headings the renderer prints when a problem fails to translate.
pub const SECTION_MARKERS: [&str; 2] = ["Translator errors", "Warning messages"];

/// Scan rendered markup for an error page and known warning sections.
pub fn scan(html: &str) -> Vec<String> {
    let mut messages = Vec::new();

    if let Some(text) = ERROR_BLOCK
        .captures(html)
        .and_then(|captures| captures.get(1))
    {
        messages.push(format!(
            "renderer error page: {}",
            unescape(text.as_str())
        ));
    }

    for marker in SECTION_MARKERS {
        if html.contains(marker) {
            messages.push(format!("renderedHTML contains '{marker}' section"));
        }
    }

    messages
}

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);")
        .expect("entity pattern is valid")
});

/// Decode each entity on its own; unknown or malformed ones pass through.
fn unescape(text: &str) -> String {
    ENTITY
        .replace_all(text, |captures: &regex::Captures<'_>| {
            let entity = &captures[0];
            htmlescape::decode_html(entity).unwrap_or_else(|_| entity.to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_block_text_is_unescaped() {
        let html = r#"<div id="error-block" class="x" text="Can&#39;t locate &quot;macro&quot; &amp; friends"></div>"#;
        assert_eq!(
            scan(html),
            vec![r#"renderer error page: Can't locate "macro" & friends"#]
        );
    }

    #[test]
    fn error_block_match_is_case_insensitive_and_accepts_single_quotes() {
        let html = r#"<DIV ID='error-block' TEXT="bad seed">"#;
        assert_eq!(scan(html), vec!["renderer error page: bad seed"]);
    }

    #[test]
    fn markers_are_reported_after_error_block() {
        let html = r#"<div id="error-block" text="oops"></div><h3>Warning messages</h3><h3>Translator errors</h3>"#;
        assert_eq!(
            scan(html),
            vec![
                "renderer error page: oops",
                "renderedHTML contains 'Translator errors' section",
                "renderedHTML contains 'Warning messages' section",
            ]
        );
    }

    #[test]
    fn text_attribute_must_be_in_the_same_tag() {
        let html = r#"<div id="error-block"></div><span text="elsewhere"></span>"#;
        assert!(scan(html).is_empty());
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert!(scan("<h3>translator errors</h3>").is_empty());
    }

    #[test]
    fn malformed_entities_keep_raw_text() {
        let html = r#"<div id="error-block" text="broken &bogus; entity">"#;
        assert_eq!(
            scan(html),
            vec!["renderer error page: broken &bogus; entity"]
        );
    }

    #[test]
    fn valid_entities_decode_next_to_malformed_ones() {
        let html = r#"<div id="error-block" text="Can&#39;t use & here &quot;x&quot;">"#;
        assert_eq!(scan(html), vec![r#"renderer error page: Can't use & here "x""#]);

        let html = r#"<div id="error-block" text="a &amp; b &bogus; &#x41;&amp c">"#;
        assert_eq!(
            scan(html),
            vec!["renderer error page: a & b &bogus; A&amp c"]
        );
    }
}
