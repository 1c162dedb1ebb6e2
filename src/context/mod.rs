//! Connection contexts
//!
//! Named contexts bundle connection parameters (host, tenant, token) for
//! switching between Kestra instances, with a single persistent default.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_config_command;
pub use models::{Context, ContextConfig};
pub use resolve::{resolve_credentials, CredentialOverrides, Credentials};
pub use store::ContextStore;
