//! Execution command handlers

use log::debug;

use crate::cli::{Cli, ExecutionsAction};
use crate::error::Result;
use crate::kestra::KestraClient;
use crate::output::{output_execution_started, output_kill_result};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run an executions subcommand
pub async fn run_executions_command(
    client: &KestraClient,
    action: &ExecutionsAction,
    cli: &Cli,
) -> Result<()> {
    match action {
        ExecutionsAction::Run(args) => {
            debug!(
                "Triggering execution of '{}/{}' (revision: {:?})",
                args.namespace, args.flow_id, args.revision
            );

            let spinner = create_spinner("Triggering execution...", cli.quiet);
            let result = client
                .trigger_execution(&args.namespace, &args.flow_id, args.revision)
                .await;
            finish_spinner(spinner);

            let (execution, raw) = result?;
            output_execution_started(&execution, &raw, &cli.output);
            Ok(())
        }
        ExecutionsAction::KillRunning(args) => {
            // An unfiltered kill hits every running execution in the
            // tenant, so it needs an explicit confirmation
            if args.namespace.is_none() && args.flow_id.is_none() {
                let prompt = format!(
                    "Kill ALL running executions in tenant '{}'?",
                    client.tenant()
                );
                if !confirm_action(&prompt, args.yes, cli.quiet)? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            debug!(
                "Killing running executions (namespace: {:?}, flow: {:?})",
                args.namespace, args.flow_id
            );

            let spinner = create_spinner("Killing running executions...", cli.quiet);
            let result = client
                .kill_running_executions(args.namespace.as_deref(), args.flow_id.as_deref())
                .await;
            finish_spinner(spinner);

            let (kill_result, raw) = result?;
            output_kill_result(
                &kill_result,
                &raw,
                &cli.output,
                args.namespace.as_deref(),
                args.flow_id.as_deref(),
            );
            Ok(())
        }
    }
}
