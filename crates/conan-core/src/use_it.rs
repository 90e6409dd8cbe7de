//! Text for the "Use it" tab

use serde::Serialize;

/// Shown when a version carries no `use_it` payload
pub const USE_IT_UNAVAILABLE: &str = "It was not possible to load this information. \
Please, check if this recipe version is compatible with Conan v2.x.";

/// Rendered content of the "Use it" tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum UseItText {
    /// Plain advisory message
    Advisory(String),
    /// Pretty-printed payload, shown verbatim in a preformatted block
    Preformatted(String),
}

impl UseItText {
    pub fn as_str(&self) -> &str {
        match self {
            UseItText::Advisory(text) | UseItText::Preformatted(text) => text,
        }
    }

    pub fn is_preformatted(&self) -> bool {
        matches!(self, UseItText::Preformatted(_))
    }
}

/// Render the payload as 2-space indented JSON, or the advisory when absent
pub fn render_use_it(payload: Option<&serde_json::Value>) -> UseItText {
    match payload {
        None => UseItText::Advisory(USE_IT_UNAVAILABLE.to_string()),
        Some(value) => UseItText::Preformatted(
            // Serializing a Value cannot fail
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_payload_is_advisory() {
        let text = render_use_it(None);
        assert_eq!(text, UseItText::Advisory(USE_IT_UNAVAILABLE.to_string()));
        assert!(text.as_str().contains("Conan v2.x"));
        assert!(!text.is_preformatted());
    }

    #[test]
    fn test_payload_is_pretty_printed_with_two_spaces() {
        let payload = json!({"cmake": {"targets": ["fmt::fmt"]}});
        let text = render_use_it(Some(&payload));

        assert!(text.is_preformatted());
        assert_eq!(
            text.as_str(),
            "{\n  \"cmake\": {\n    \"targets\": [\n      \"fmt::fmt\"\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_scalar_payload() {
        let payload = json!("see docs");
        assert_eq!(
            render_use_it(Some(&payload)),
            UseItText::Preformatted("\"see docs\"".to_string())
        );
    }
}
