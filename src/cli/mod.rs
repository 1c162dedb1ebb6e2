//! CLI argument parsing

mod common;
mod context;
mod executions;
mod flows;
mod namespaces;

use clap::{Parser, Subcommand};

use crate::config::{context as context_config, defaults, env_vars};

pub use common::OutputFormat;
pub use context::{AddContextArgs, ConfigAction, RemoveContextArgs, UseContextArgs};
pub use executions::{ExecutionsAction, KillRunningArgs, RunExecutionArgs};
pub use flows::{DeployFlowArgs, FlowsAction, GetFlowArgs, ListFlowsArgs};
pub use namespaces::{ListNamespacesArgs, NamespacesAction};

/// Kestra CLI
#[derive(Parser, Debug)]
#[command(name = "kestractl")]
#[command(version)]
#[command(about = "A CLI for the Kestra workflow orchestration platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Kestra host URL (overrides the active context)
    #[arg(long, global = true, env = env_vars::HOST)]
    pub host: Option<String>,

    /// Tenant id (overrides the active context)
    #[arg(long, global = true, env = env_vars::TENANT)]
    pub tenant: Option<String>,

    /// API token (overrides the active context)
    #[arg(short = 't', long, global = true, env = env_vars::TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Named context to use for this invocation
    #[arg(long, global = true, env = context_config::ENV_VAR)]
    pub context: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress spinners and interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage flows
    #[command(subcommand)]
    Flows(FlowsAction),

    /// Browse namespaces
    #[command(subcommand)]
    Namespaces(NamespacesAction),

    /// Trigger and control executions
    #[command(subcommand)]
    Executions(ExecutionsAction),

    /// Manage connection contexts
    #[command(subcommand)]
    Config(ConfigAction),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::try_parse_from(["kestractl", "version"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Table);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn test_flows_list_parses() {
        let cli = Cli::try_parse_from(["kestractl", "flows", "list", "dev"]).unwrap();
        match cli.command {
            Command::Flows(FlowsAction::List(args)) => assert_eq!(args.namespace, "dev"),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_flows_get_parses() {
        let cli = Cli::try_parse_from(["kestractl", "flows", "get", "dev", "etl"]).unwrap();
        match cli.command {
            Command::Flows(FlowsAction::Get(args)) => {
                assert_eq!(args.namespace, "dev");
                assert_eq!(args.flow_id, "etl");
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "kestractl", "flows", "list", "dev", "-o", "json", "--host", "http://localhost:8080",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.host, Some("http://localhost:8080".to_string()));
    }

    #[test]
    fn test_config_add_parses() {
        let cli = Cli::try_parse_from([
            "kestractl",
            "config",
            "add",
            "prod",
            "https://kestra.corp.com",
            "main",
            "--token",
            "secret",
            "--default",
        ])
        .unwrap();
        assert_eq!(cli.token, Some("secret".to_string()));
        match cli.command {
            Command::Config(ConfigAction::Add(args)) => {
                assert_eq!(args.name, "prod");
                assert_eq!(args.host, "https://kestra.corp.com");
                assert_eq!(args.tenant, "main");
                assert!(args.default);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_executions_run_with_revision() {
        let cli = Cli::try_parse_from([
            "kestractl", "executions", "run", "dev", "etl", "--revision", "5",
        ])
        .unwrap();
        match cli.command {
            Command::Executions(ExecutionsAction::Run(args)) => {
                assert_eq!(args.namespace, "dev");
                assert_eq!(args.flow_id, "etl");
                assert_eq!(args.revision, Some(5));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_kill_running_flow_requires_namespace() {
        let result =
            Cli::try_parse_from(["kestractl", "executions", "kill-running", "-f", "etl"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_kill_running_with_filters() {
        let cli = Cli::try_parse_from([
            "kestractl",
            "executions",
            "kill-running",
            "-n",
            "dev",
            "-f",
            "etl",
            "-y",
        ])
        .unwrap();
        match cli.command {
            Command::Executions(ExecutionsAction::KillRunning(args)) => {
                assert_eq!(args.namespace, Some("dev".to_string()));
                assert_eq!(args.flow_id, Some("etl".to_string()));
                assert!(args.yes);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_namespaces_list_defaults() {
        let cli = Cli::try_parse_from(["kestractl", "namespaces", "list"]).unwrap();
        match cli.command {
            Command::Namespaces(NamespacesAction::List(args)) => {
                assert!(args.query.is_none());
                assert_eq!(args.page, 1);
                assert_eq!(args.size, 100);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_namespaces_list_with_query() {
        let cli =
            Cli::try_parse_from(["kestractl", "namespaces", "list", "-q", "team"]).unwrap();
        match cli.command {
            Command::Namespaces(NamespacesAction::List(args)) => {
                assert_eq!(args.query, Some("team".to_string()));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_output_format_rejected() {
        let result = Cli::try_parse_from(["kestractl", "version", "-o", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        let result = Cli::try_parse_from(["kestractl"]);
        assert!(result.is_err());
    }
}
