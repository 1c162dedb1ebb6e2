//! Flow command handlers

use std::fs;

use log::debug;

use crate::cli::{Cli, FlowsAction};
use crate::error::{KestraError, Result};
use crate::kestra::KestraClient;
use crate::output::{output_deployed_flows, output_flow_detail, output_flows};
use crate::ui::{create_spinner, finish_spinner};

use super::models::parse_flow_source;

/// Run a flows subcommand
pub async fn run_flows_command(
    client: &KestraClient,
    action: &FlowsAction,
    cli: &Cli,
) -> Result<()> {
    match action {
        FlowsAction::List(args) => {
            debug!("Listing flows in namespace '{}'", args.namespace);

            let spinner = create_spinner("Fetching flows...", cli.quiet);
            let result = client.get_flows(&args.namespace).await;
            finish_spinner(spinner);

            let (flows, raw) = result?;
            output_flows(&flows, &raw, &cli.output, &args.namespace);
            Ok(())
        }
        FlowsAction::Get(args) => {
            debug!("Fetching flow '{}/{}'", args.namespace, args.flow_id);

            let spinner = create_spinner("Fetching flow...", cli.quiet);
            let result = client.get_flow(&args.namespace, &args.flow_id).await;
            finish_spinner(spinner);

            let (flow, raw) = result?;
            output_flow_detail(&flow, &raw, &cli.output);
            Ok(())
        }
        FlowsAction::Deploy(args) => {
            let source = fs::read_to_string(&args.file).map_err(|e| KestraError::Validation {
                status: None,
                message: format!("Failed to read flow file '{}': {}", args.file.display(), e),
            })?;

            // Validate locally before the upload so syntax errors never
            // reach the server
            let documents = parse_flow_source(&source)?;
            debug!(
                "Deploying {} flow definition(s) to namespace '{}'",
                documents.len(),
                args.namespace
            );

            let spinner = create_spinner("Deploying flows...", cli.quiet);
            let result = client.deploy_flows(&args.namespace, source).await;
            finish_spinner(spinner);

            let (flows, raw) = result?;
            output_deployed_flows(&flows, &raw, &cli.output, &args.namespace);
            Ok(())
        }
    }
}
