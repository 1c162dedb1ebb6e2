//! Flow CLI arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Flow subcommands
#[derive(Subcommand, Debug)]
pub enum FlowsAction {
    /// List flows in a namespace
    List(ListFlowsArgs),

    /// Show a single flow
    Get(GetFlowArgs),

    /// Upload flow definitions from a YAML file
    Deploy(DeployFlowArgs),
}

/// Arguments for 'flows list' subcommand
#[derive(Parser, Debug)]
pub struct ListFlowsArgs {
    /// Namespace to list flows from
    pub namespace: String,
}

/// Arguments for 'flows get' subcommand
#[derive(Parser, Debug)]
pub struct GetFlowArgs {
    /// Namespace of the flow
    pub namespace: String,

    /// Flow id
    pub flow_id: String,
}

/// Arguments for 'flows deploy' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "NOTE: The file may hold several flows separated by '---'.\n\
                        Flows already on the server but absent from the file are kept.")]
pub struct DeployFlowArgs {
    /// Namespace to deploy into
    pub namespace: String,

    /// Path to the flow definition file (YAML)
    pub file: PathBuf,
}
