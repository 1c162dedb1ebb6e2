//! Config management CLI arguments (kubectl-style)

use clap::{Parser, Subcommand};

/// Config subcommands for managing connection contexts
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Add or update a context in the config file
    Add(AddContextArgs),

    /// Remove a context from the config file
    Remove(RemoveContextArgs),

    /// Set the default context
    Use(UseContextArgs),

    /// Display all configured contexts
    Show,
}

/// Arguments for 'config add' subcommand
///
/// The host and tenant positionals carry their own ids so they do not
/// collide with the global `--host`/`--tenant` override flags.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        kestractl config add prod https://kestra.corp.com main --token <TOKEN> --default\n  \
        kestractl config add dev http://localhost:8080 main --token <TOKEN>\n  \
        kestractl config add prod https://kestra.corp.com acme --token <TOKEN>   # update existing context")]
pub struct AddContextArgs {
    /// Context name
    pub name: String,

    /// Kestra host URL
    #[arg(id = "context-host", value_name = "HOST")]
    pub host: String,

    /// Tenant id
    #[arg(id = "context-tenant", value_name = "TENANT")]
    pub tenant: String,

    /// Make this context the default
    #[arg(long, default_value_t = false)]
    pub default: bool,
}

/// Arguments for 'config remove' subcommand
#[derive(Parser, Debug)]
pub struct RemoveContextArgs {
    /// Context name to remove
    pub name: String,
}

/// Arguments for 'config use' subcommand
#[derive(Parser, Debug)]
pub struct UseContextArgs {
    /// Context name to set as default
    pub name: String,
}
