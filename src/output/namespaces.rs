//! Namespace output formatters

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::kestra::{NamespaceEntry, PagedResults};

use super::common::print_json;

/// Output a namespace search result in the specified format
pub fn output_namespaces(
    page: &PagedResults<NamespaceEntry>,
    raw: &serde_json::Value,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Json => print_json(raw),
        OutputFormat::Table => output_namespaces_table(page),
    }
}

fn output_namespaces_table(page: &PagedResults<NamespaceEntry>) {
    if page.results.is_empty() {
        println!("No namespaces found.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["ID", "DELETED"]);

    for entry in &page.results {
        table.add_row(vec![
            entry.id(),
            if entry.is_deleted() { "Yes" } else { "No" },
        ]);
    }

    println!();
    println!("{table}");

    let shown = page.results.len() as u64;
    if page.total > shown {
        println!("\nTotal: {} namespaces (showing {})", page.total, shown);
    } else {
        println!("\nTotal: {} namespaces", page.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(ids: &[&str], total: u64) -> PagedResults<NamespaceEntry> {
        PagedResults {
            results: ids
                .iter()
                .map(|id| {
                    serde_json::from_value(serde_json::json!({"id": id, "deleted": false}))
                        .unwrap()
                })
                .collect(),
            total,
        }
    }

    #[test]
    fn test_output_namespaces_table_empty() {
        // Should not panic with empty input
        output_namespaces(&page_of(&[], 0), &serde_json::json!({}), &OutputFormat::Table);
    }

    #[test]
    fn test_output_namespaces_table() {
        let page = page_of(&["company.team", "dev"], 2);
        // Should not panic
        output_namespaces(&page, &serde_json::json!({}), &OutputFormat::Table);
    }

    #[test]
    fn test_output_namespaces_table_truncated_page() {
        let page = page_of(&["dev"], 42);
        // Should not panic
        output_namespaces(&page, &serde_json::json!({}), &OutputFormat::Table);
    }

    #[test]
    fn test_output_namespaces_json() {
        let raw = serde_json::json!({"results": [{"id": "dev"}], "total": 1});
        // Should not panic
        output_namespaces(&page_of(&["dev"], 1), &raw, &OutputFormat::Json);
    }
}
