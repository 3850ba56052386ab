//! Error handling utilities for MCP server

use rmcp::ErrorData;
use trestle_core::TimelineError;

/// Converts a timeline error into an MCP error. Rejected gestures are the
/// caller's fault and map to `invalid_params`; everything else is internal.
pub fn to_mcp_error(message: &str, error: &TimelineError) -> ErrorData {
    let message = format!("{message}: {error}");
    if error.is_validation() {
        ErrorData::invalid_params(message, None)
    } else {
        ErrorData::internal_error(message, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;
    use trestle_core::TaskId;

    use super::*;

    #[test]
    fn test_validation_errors_are_invalid_params() {
        let error = TimelineError::TaskNotFound {
            id: TaskId::Server(9),
        };
        let mcp = to_mcp_error("Failed to summarize task", &error);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.message.contains("Task with ID 9 not found"));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = TimelineError::Rejected {
            operation: "task update".to_string(),
        };
        let mcp = to_mcp_error("Failed to move task", &error);
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
    }
}
