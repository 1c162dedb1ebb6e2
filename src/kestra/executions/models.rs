//! Execution data models

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Execution data from the Kestra API
#[derive(Deserialize, Debug, Clone)]
pub struct Execution {
    pub id: String,
    pub namespace: String,
    #[serde(rename = "flowId")]
    pub flow_id: String,
    pub state: Option<ExecutionState>,
}

/// Execution state block
#[derive(Deserialize, Debug, Clone)]
pub struct ExecutionState {
    pub current: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
}

impl Execution {
    /// Current state name, or UNKNOWN when the server omitted it
    pub fn state_display(&self) -> &str {
        self.state
            .as_ref()
            .and_then(|s| s.current.as_deref())
            .unwrap_or("UNKNOWN")
    }

    /// Start date formatted for display
    pub fn start_date_display(&self) -> String {
        let raw = self.state.as_ref().and_then(|s| s.start_date.as_deref());
        match raw {
            Some(value) => match DateTime::parse_from_rfc3339(value) {
                Ok(parsed) => parsed
                    .with_timezone(&Utc)
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string(),
                Err(_) => value.to_string(),
            },
            None => "-".to_string(),
        }
    }
}

/// Result of a bulk execution operation
///
/// Kestra's by-query endpoints usually report a `count`; some versions
/// return a message instead, and both fields stay optional.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BulkOperationResult {
    pub count: Option<u64>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_deserialization() {
        let json = r#"{
            "id": "3kK7eXbVmQpZ1aB2cD4eF5",
            "namespace": "dev",
            "flowId": "etl",
            "state": {
                "current": "CREATED",
                "startDate": "2025-06-01T10:30:00.000Z"
            }
        }"#;

        let execution: Execution = serde_json::from_str(json).unwrap();
        assert_eq!(execution.id, "3kK7eXbVmQpZ1aB2cD4eF5");
        assert_eq!(execution.flow_id, "etl");
        assert_eq!(execution.state_display(), "CREATED");
    }

    #[test]
    fn test_execution_deserialization_minimal() {
        let json = r#"{"id": "x", "namespace": "dev", "flowId": "etl"}"#;

        let execution: Execution = serde_json::from_str(json).unwrap();
        assert_eq!(execution.state_display(), "UNKNOWN");
        assert_eq!(execution.start_date_display(), "-");
    }

    #[test]
    fn test_start_date_display_formats_rfc3339() {
        let json = r#"{
            "id": "x",
            "namespace": "dev",
            "flowId": "etl",
            "state": {"current": "RUNNING", "startDate": "2025-06-01T10:30:45.123Z"}
        }"#;

        let execution: Execution = serde_json::from_str(json).unwrap();
        assert_eq!(execution.start_date_display(), "2025-06-01 10:30:45 UTC");
    }

    #[test]
    fn test_start_date_display_keeps_unparsable_value() {
        let json = r#"{
            "id": "x",
            "namespace": "dev",
            "flowId": "etl",
            "state": {"current": "RUNNING", "startDate": "yesterday"}
        }"#;

        let execution: Execution = serde_json::from_str(json).unwrap();
        assert_eq!(execution.start_date_display(), "yesterday");
    }

    #[test]
    fn test_bulk_result_deserialization() {
        let result: BulkOperationResult =
            serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(result.count, Some(3));
        assert_eq!(result.message, None);
    }

    #[test]
    fn test_bulk_result_defaults() {
        let result = BulkOperationResult::default();
        assert_eq!(result.count, None);
        assert_eq!(result.message, None);
    }
}
