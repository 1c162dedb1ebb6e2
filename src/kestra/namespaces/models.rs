//! Namespace data models

use serde::Deserialize;

/// Namespace data from the Kestra API
#[derive(Deserialize, Debug, Clone)]
pub struct Namespace {
    pub id: String,
    pub deleted: Option<bool>,
}

/// One entry in a namespace search result.
///
/// Open-source Kestra returns full namespace objects; some endpoints and
/// older versions return bare id strings, so both shapes are accepted.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum NamespaceEntry {
    Full(Namespace),
    Id(String),
}

impl NamespaceEntry {
    /// Namespace id
    pub fn id(&self) -> &str {
        match self {
            NamespaceEntry::Full(namespace) => &namespace.id,
            NamespaceEntry::Id(id) => id,
        }
    }

    /// Whether the namespace is marked deleted
    pub fn is_deleted(&self) -> bool {
        match self {
            NamespaceEntry::Full(namespace) => namespace.deleted.unwrap_or(false),
            NamespaceEntry::Id(_) => false,
        }
    }
}
