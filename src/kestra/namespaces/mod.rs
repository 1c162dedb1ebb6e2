//! Namespace module

mod api;
mod commands;
mod models;

pub use commands::run_namespaces_command;
pub use models::{Namespace, NamespaceEntry};
