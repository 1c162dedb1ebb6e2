//! Execution module

mod api;
mod commands;
mod models;

pub use commands::run_executions_command;
pub use models::{BulkOperationResult, Execution, ExecutionState};
