//! Context configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::defaults;

/// Top-level context configuration
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContextConfig {
    /// Name of the default context
    #[serde(rename = "default-context", skip_serializing_if = "Option::is_none")]
    pub default_context: Option<String>,
    /// Map of context name to context configuration
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
}

impl ContextConfig {
    /// Whether the named context is the default one
    pub fn is_default(&self, name: &str) -> bool {
        self.default_context.as_deref() == Some(name)
    }

    /// Comma-separated context names for error messages
    pub fn available_names(&self) -> String {
        if self.contexts.is_empty() {
            return "<none>".to_string();
        }
        self.contexts
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A named context with connection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Kestra server URL
    pub host: String,
    /// Tenant identifier
    #[serde(default = "default_tenant")]
    pub tenant: String,
    /// API token (stored in config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_tenant() -> String {
    defaults::TENANT.to_string()
}
