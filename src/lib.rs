//! Kestractl - A CLI for the Kestra workflow orchestration platform
//!
//! Manage flows, namespaces and executions on a Kestra server from the
//! command line, with named connection contexts for switching between
//! instances.
//!
//! # Features
//!
//! - List, inspect and deploy flows
//! - Trigger executions and kill running ones
//! - Browse namespaces
//! - Named contexts with a persistent default (kubectl-style)
//! - Table output for humans, raw JSON for scripts
//!
//! # Example
//!
//! ```bash
//! # Store a connection context and make it the default
//! kestractl config add prod https://kestra.corp.com main --token <TOKEN> --default
//!
//! # List flows in a namespace
//! kestractl flows list company.team
//!
//! # Deploy flow definitions from a file
//! kestractl flows deploy company.team flows.yaml
//!
//! # Trigger an execution
//! kestractl executions run company.team hello-world
//!
//! # Output as JSON
//! kestractl flows list company.team -o json
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod kestra;
pub mod output;
pub mod ui;

pub use cli::{
    Cli, Command, ConfigAction, ExecutionsAction, FlowsAction, NamespacesAction, OutputFormat,
};
pub use context::{
    resolve_credentials, run_config_command, Context, ContextConfig, ContextStore,
    CredentialOverrides, Credentials,
};
pub use error::{KestraError, Result};
pub use kestra::{
    run_executions_command, run_flows_command, run_namespaces_command, BulkOperationResult,
    Execution, Flow, KestraClient, Namespace, NamespaceEntry, PagedResults,
};
pub use output::{
    output_deployed_flows, output_execution_started, output_flow_detail, output_flows,
    output_kill_result, output_namespaces,
};
