//! Flow data models

use serde::Deserialize;

use crate::error::{KestraError, Result};

/// Flow data from the Kestra API
#[derive(Deserialize, Debug, Clone)]
pub struct Flow {
    pub id: String,
    pub namespace: String,
    pub revision: Option<u32>,
    pub description: Option<String>,
    pub disabled: Option<bool>,
}

impl Flow {
    /// Revision formatted for display
    pub fn revision_display(&self) -> String {
        match self.revision {
            Some(revision) => revision.to_string(),
            None => "-".to_string(),
        }
    }

    /// Description, or empty string when the flow has none
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Whether the flow is disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

/// Parse a flow source file into its YAML documents.
///
/// Kestra flow files may hold several flows separated by `---`; empty
/// documents (stray separators, comment-only sections) are skipped.
pub fn parse_flow_source(source: &str) -> Result<Vec<serde_yml::Value>> {
    let mut documents = Vec::new();
    for document in serde_yml::Deserializer::from_str(source) {
        let value = serde_yml::Value::deserialize(document).map_err(|e| {
            KestraError::Validation {
                status: None,
                message: format!("Invalid flow definition: {}", e),
            }
        })?;
        if !value.is_null() {
            documents.push(value);
        }
    }

    if documents.is_empty() {
        return Err(KestraError::Validation {
            status: None,
            message: "Flow file contains no flow definitions".to_string(),
        });
    }

    Ok(documents)
}
