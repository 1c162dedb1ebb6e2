//! Kestra API client module
//!
//! This module provides functionality to interact with the Kestra API.

mod client;
pub mod executions;
pub mod flows;
mod models;
pub mod namespaces;

pub use client::KestraClient;
pub use executions::{run_executions_command, BulkOperationResult, Execution, ExecutionState};
pub use flows::{parse_flow_source, run_flows_command, Flow};
pub use models::PagedResults;
pub use namespaces::{run_namespaces_command, Namespace, NamespaceEntry};
