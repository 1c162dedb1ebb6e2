//! Execution output formatters

use crate::cli::OutputFormat;
use crate::kestra::{BulkOperationResult, Execution};

use super::common::print_json;

/// Output a freshly triggered execution in the specified format
pub fn output_execution_started(
    execution: &Execution,
    raw: &serde_json::Value,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Json => print_json(raw),
        OutputFormat::Table => {
            println!("✓ Execution '{}' started", execution.id);
            println!("  Flow:    {}/{}", execution.namespace, execution.flow_id);
            println!("  State:   {}", execution.state_display());
            println!("  Started: {}", execution.start_date_display());
        }
    }
}

/// Output the result of a kill request in the specified format
pub fn output_kill_result(
    result: &BulkOperationResult,
    raw: &serde_json::Value,
    format: &OutputFormat,
    namespace: Option<&str>,
    flow_id: Option<&str>,
) {
    match format {
        OutputFormat::Json => print_json(raw),
        OutputFormat::Table => {
            println!("✓ Kill request sent");
            println!("  Namespace: {}", namespace.unwrap_or("<all>"));
            println!("  Flow:      {}", flow_id.unwrap_or("<all>"));
            if let Some(count) = result.count {
                println!("  Killed:    {} execution(s)", count);
            } else if let Some(message) = &result.message {
                println!("  Server:    {}", message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_execution() -> Execution {
        serde_json::from_value(serde_json::json!({
            "id": "exec-1",
            "namespace": "dev",
            "flowId": "etl",
            "state": {"current": "CREATED", "startDate": "2025-06-01T10:30:00.000Z"}
        }))
        .unwrap()
    }

    #[test]
    fn test_output_execution_started() {
        let execution = create_test_execution();
        let raw = serde_json::json!({"id": "exec-1"});
        // Should not panic
        output_execution_started(&execution, &raw, &OutputFormat::Table);
        output_execution_started(&execution, &raw, &OutputFormat::Json);
    }

    #[test]
    fn test_output_kill_result_with_count() {
        let result = BulkOperationResult {
            count: Some(3),
            message: None,
        };
        // Should not panic
        output_kill_result(
            &result,
            &serde_json::json!({"count": 3}),
            &OutputFormat::Table,
            Some("dev"),
            Some("etl"),
        );
    }

    #[test]
    fn test_output_kill_result_unfiltered() {
        let result = BulkOperationResult::default();
        // Should not panic
        output_kill_result(
            &result,
            &serde_json::Value::Null,
            &OutputFormat::Table,
            None,
            None,
        );
    }

    #[test]
    fn test_output_kill_result_json() {
        let result = BulkOperationResult {
            count: Some(1),
            message: None,
        };
        // Should not panic
        output_kill_result(
            &result,
            &serde_json::json!({"count": 1}),
            &OutputFormat::Json,
            None,
            None,
        );
    }
}
