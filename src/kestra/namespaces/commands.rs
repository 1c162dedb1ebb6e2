//! Namespace command handlers

use log::debug;

use crate::cli::{Cli, NamespacesAction};
use crate::error::Result;
use crate::kestra::KestraClient;
use crate::output::output_namespaces;
use crate::ui::{create_spinner, finish_spinner};

/// Run a namespaces subcommand
pub async fn run_namespaces_command(
    client: &KestraClient,
    action: &NamespacesAction,
    cli: &Cli,
) -> Result<()> {
    match action {
        NamespacesAction::List(args) => {
            debug!(
                "Searching namespaces (query: {:?}, page: {}, size: {})",
                args.query, args.page, args.size
            );

            let spinner = create_spinner("Fetching namespaces...", cli.quiet);
            let result = client
                .search_namespaces(args.query.as_deref(), args.page, args.size)
                .await;
            finish_spinner(spinner);

            let (page, raw) = result?;
            output_namespaces(&page, &raw, &cli.output);
            Ok(())
        }
    }
}
