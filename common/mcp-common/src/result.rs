//! Helpers for building `CallToolResult` responses

use rmcp::{
    model::{CallToolResult, Content, RawContent},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::error::internal_error;

/// Serialize `data` as pretty JSON into a single text content item.
///
/// Serialization failures become an [`internal_error`].
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::json_success;
///
/// fn get_scoring_weights(&self) -> Result<CallToolResult, McpError> {
///     json_success(&self.config.weights)
/// }
/// ```
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| internal_error(format!("JSON error: {e}")))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// First text item of a result, if any. Mostly useful in tests and
/// in-process callers that want to parse the JSON back.
pub fn text_of(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .iter()
        .find_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Line {
        name: String,
        ppg: f64,
    }

    #[test]
    fn test_json_success_roundtrips_text() {
        let line = Line {
            name: "Nikola Jokic".to_string(),
            ppg: 26.4,
        };
        let result = json_success(&line).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        let value: serde_json::Value = serde_json::from_str(text_of(&result).unwrap()).unwrap();
        assert_eq!(value["name"], "Nikola Jokic");
        assert_eq!(value["ppg"], 26.4);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("no JSON form"))
        }
    }

    #[test]
    fn test_json_success_reports_internal_error() {
        let err = json_success(&Unserializable).unwrap_err();
        assert_eq!(err.code.0, -32603);
        assert!(err.message.contains("JSON error: no JSON form"));
    }

    #[test]
    fn test_text_of_empty() {
        let result = CallToolResult::success(vec![]);
        assert!(text_of(&result).is_none());
    }
}
