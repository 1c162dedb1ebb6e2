//! Flow output formatters

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::kestra::Flow;

use super::common::print_json;

/// Output a flow listing in the specified format
pub fn output_flows(flows: &[Flow], raw: &serde_json::Value, format: &OutputFormat, namespace: &str) {
    match format {
        OutputFormat::Json => print_json(raw),
        OutputFormat::Table => output_flows_table(flows, namespace),
    }
}

fn output_flows_table(flows: &[Flow], namespace: &str) {
    if flows.is_empty() {
        println!("No flows found in namespace '{}'.", namespace);
        return;
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["ID", "NAMESPACE", "REVISION", "DESCRIPTION"]);

    for flow in flows {
        table.add_row(vec![
            flow.id.clone(),
            flow.namespace.clone(),
            flow.revision_display(),
            flow.description_or_empty().to_string(),
        ]);
    }

    println!();
    println!("{table}");
    println!("\nTotal: {} flows", flows.len());
}

/// Output a single flow in the specified format
pub fn output_flow_detail(flow: &Flow, raw: &serde_json::Value, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(raw),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.add_row(vec!["ID", &flow.id]);
            table.add_row(vec!["NAMESPACE", &flow.namespace]);
            table.add_row(vec!["REVISION", &flow.revision_display()]);
            table.add_row(vec!["DESCRIPTION", flow.description_or_empty()]);
            table.add_row(vec!["DISABLED", if flow.is_disabled() { "Yes" } else { "No" }]);

            println!();
            println!("{table}");
        }
    }
}

/// Output the result of a flow deployment in the specified format
pub fn output_deployed_flows(
    flows: &[Flow],
    raw: &serde_json::Value,
    format: &OutputFormat,
    namespace: &str,
) {
    match format {
        OutputFormat::Json => print_json(raw),
        OutputFormat::Table => {
            println!(
                "✓ Deployed {} flow(s) to namespace '{}'",
                flows.len(),
                namespace
            );
            for flow in flows {
                println!("  {} (revision {})", flow.id, flow.revision_display());
            }
        }
    }
}
