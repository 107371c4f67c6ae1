//! Response Extraction — recovers the JSON object embedded in a model reply.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in reply")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Takes the span from the first `{` to the last `}` (inclusive) and parses it.
///
/// Models tend to wrap the object in prose or code fences; anything outside
/// the outermost braces is discarded. No partial recovery is attempted.
pub fn extract_json_object(reply: &str) -> Result<Value, ExtractError> {
    let start = reply.find('{').ok_or(ExtractError::NoJsonObject)?;
    let end = reply.rfind('}').ok_or(ExtractError::NoJsonObject)?;
    if end < start {
        return Err(ExtractError::NoJsonObject);
    }
    Ok(serde_json::from_str(&reply[start..=end])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_wrapped_in_prose() {
        let reply = "Here is the result:\n{\"overallScore\": 82, \"nested\": {\"a\": [1, 2]}}\nThanks";
        assert_eq!(
            extract_json_object(reply).unwrap(),
            json!({"overallScore": 82, "nested": {"a": [1, 2]}})
        );
    }

    #[test]
    fn test_object_in_code_fence() {
        let reply = "```json\n{\"verdict\": \"legitimate\"}\n```";
        assert_eq!(
            extract_json_object(reply).unwrap(),
            json!({"verdict": "legitimate"})
        );
    }

    #[test]
    fn test_no_braces_is_error() {
        assert!(matches!(
            extract_json_object("I cannot analyze this profile."),
            Err(ExtractError::NoJsonObject)
        ));
        assert!(matches!(extract_json_object(""), Err(ExtractError::NoJsonObject)));
    }

    #[test]
    fn test_reversed_braces_is_error() {
        assert!(matches!(
            extract_json_object("} nothing here {"),
            Err(ExtractError::NoJsonObject)
        ));
    }

    #[test]
    fn test_invalid_span_is_error() {
        assert!(matches!(
            extract_json_object("{\"overallScore\": 82,}"),
            Err(ExtractError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_two_objects_span_is_greedy() {
        // First `{` to last `}` covers both objects, which is not valid JSON.
        assert!(matches!(
            extract_json_object("{\"a\": 1} and {\"b\": 2}"),
            Err(ExtractError::InvalidJson(_))
        ));
    }
}
