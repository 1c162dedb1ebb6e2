//! Execution CLI arguments

use clap::{Parser, Subcommand};

/// Execution subcommands
#[derive(Subcommand, Debug)]
pub enum ExecutionsAction {
    /// Trigger an execution of a flow
    Run(RunExecutionArgs),

    /// Kill all running executions matching the filters
    #[command(name = "kill-running")]
    KillRunning(KillRunningArgs),
}

/// Arguments for 'executions run' subcommand
#[derive(Parser, Debug)]
pub struct RunExecutionArgs {
    /// Namespace of the flow
    pub namespace: String,

    /// Flow id to execute
    pub flow_id: String,

    /// Execute a specific flow revision instead of the latest
    #[arg(long)]
    pub revision: Option<u32>,
}

/// Arguments for 'executions kill-running' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "NOTE: Without filters this kills every running execution in the\n\
                        tenant and asks for confirmation first (skip with --yes).")]
pub struct KillRunningArgs {
    /// Only kill executions in this namespace
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Only kill executions of this flow (requires --namespace)
    #[arg(short = 'f', long = "flow-id", requires = "namespace")]
    pub flow_id: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
