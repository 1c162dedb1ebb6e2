//! kestractl - Main entry point

use clap::Parser;
use log::debug;

use kestractl::context::{
    resolve_credentials, run_config_command, ContextStore, CredentialOverrides,
};
use kestractl::kestra::{
    run_executions_command, run_flows_command, run_namespaces_command, KestraClient,
};
use kestractl::{Cli, Command, KestraError, OutputFormat, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    debug!("kestractl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        report_error(&e, &cli.output);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Version => {
            println!("kestractl v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Config(action) => run_config_command(action, cli),
        Command::Flows(action) => {
            let client = build_client(cli)?;
            run_flows_command(&client, action, cli).await
        }
        Command::Namespaces(action) => {
            let client = build_client(cli)?;
            run_namespaces_command(&client, action, cli).await
        }
        Command::Executions(action) => {
            let client = build_client(cli)?;
            run_executions_command(&client, action, cli).await
        }
    }
}

/// Resolve credentials and build the API client
fn build_client(cli: &Cli) -> Result<KestraClient> {
    let store = ContextStore::new();
    let credentials = resolve_credentials(&store, &CredentialOverrides::from_cli(cli))?;
    Ok(KestraClient::new(credentials))
}

/// Report a command failure on stderr in the requested output format
fn report_error(error: &KestraError, output: &OutputFormat) {
    match output {
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": error.to_string() }));
        }
        OutputFormat::Table => {
            eprintln!("Error: {}", error);
        }
    }
}
