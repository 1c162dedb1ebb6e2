//! Namespace CLI arguments

use clap::{Parser, Subcommand};

use crate::config::api;

/// Namespace subcommands
#[derive(Subcommand, Debug)]
pub enum NamespacesAction {
    /// Search namespaces
    List(ListNamespacesArgs),
}

/// Arguments for 'namespaces list' subcommand
#[derive(Parser, Debug)]
pub struct ListNamespacesArgs {
    /// Filter namespaces by a search term
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Result page (1-based)
    #[arg(long, default_value_t = api::DEFAULT_PAGE)]
    pub page: u32,

    /// Page size
    #[arg(long, default_value_t = api::DEFAULT_PAGE_SIZE)]
    pub size: u32,
}
