//! Error handling utilities for MCP server

use daycount_core::TrackerError;
use rmcp::ErrorData;

/// Helper to convert tracker errors to MCP errors
///
/// Rejected input and unknown IDs are reported as invalid parameters so the
/// caller can correct the request; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_user_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_user_errors_are_invalid_params() {
        let error = TrackerError::invalid_input("title").with_reason("cannot be empty");
        let mcp = to_mcp_error("Failed to create D-Day", &error);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.contains("Failed to create D-Day"));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = TrackerError::Configuration {
            message: "broken".to_string(),
        };
        assert_eq!(
            to_mcp_error("Failed", &error).code,
            ErrorCode::INTERNAL_ERROR
        );
    }
}
