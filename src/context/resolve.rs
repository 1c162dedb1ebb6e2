//! Effective credential resolution

use log::debug;

use crate::cli::Cli;
use crate::config::{context as context_config, defaults, env_vars};
use crate::error::{KestraError, Result};

use super::models::{Context, ContextConfig};
use super::store::ContextStore;

/// Connection parameters resolved from CLI flags and the context store
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Kestra server URL
    pub host: String,
    /// Tenant identifier
    pub tenant: String,
    /// API token
    pub token: String,
}

/// Per-field overrides collected from the global CLI flags.
///
/// Flag-beats-environment is already settled by clap before these are
/// built, so resolution only has to rank override > context > default.
#[derive(Debug, Default)]
pub struct CredentialOverrides {
    pub host: Option<String>,
    pub tenant: Option<String>,
    pub token: Option<String>,
    pub context: Option<String>,
}

impl CredentialOverrides {
    /// Collect the overrides from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            tenant: cli.tenant.clone(),
            token: cli.token.clone(),
            context: cli.context.clone(),
        }
    }
}

/// Resolve the effective credentials for an API call.
///
/// Field precedence: explicit override, then the selected context, then
/// the built-in tenant default. Host and token are required; a missing
/// one is reported with the ways to provide it.
pub fn resolve_credentials(
    store: &ContextStore,
    overrides: &CredentialOverrides,
) -> Result<Credentials> {
    let config = store.load()?;
    let context = select_context(&config, overrides.context.as_deref())?;

    let host = overrides
        .host
        .clone()
        .or_else(|| context.map(|(_, ctx)| ctx.host.clone()))
        .ok_or_else(|| KestraError::Config(missing_field_message("host", "--host", env_vars::HOST)))?;

    let tenant = overrides
        .tenant
        .clone()
        .or_else(|| context.map(|(_, ctx)| ctx.tenant.clone()))
        .unwrap_or_else(|| defaults::TENANT.to_string());

    let token = overrides
        .token
        .clone()
        .or_else(|| context.and_then(|(_, ctx)| ctx.token.clone()))
        .ok_or_else(|| {
            KestraError::Config(missing_field_message("API token", "--token", env_vars::TOKEN))
        })?;

    debug!("Resolved host '{}', tenant '{}'", host, tenant);

    Ok(Credentials {
        host,
        tenant,
        token,
    })
}

/// Pick the context credentials fall back to.
///
/// An explicitly named context must exist; a dangling default pointer is
/// ignored so a hand-edited file degrades to "no context" instead of
/// failing every command.
fn select_context<'a>(
    config: &'a ContextConfig,
    requested: Option<&'a str>,
) -> Result<Option<(&'a str, &'a Context)>> {
    if let Some(name) = requested {
        let ctx = config.contexts.get(name).ok_or_else(|| {
            KestraError::NotFound(format!(
                "Context '{}' not found. Available contexts: {}",
                name,
                config.available_names()
            ))
        })?;
        debug!("Using requested context '{}'", name);
        return Ok(Some((name, ctx)));
    }

    match config.default_context.as_deref() {
        Some(name) => match config.contexts.get(name) {
            Some(ctx) => {
                debug!("Using default context '{}'", name);
                Ok(Some((name, ctx)))
            }
            None => {
                debug!("Default context '{}' not present in config, ignoring", name);
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

fn missing_field_message(field: &str, flag: &str, env_var: &str) -> String {
    format!(
        "No Kestra {} configured. Provide one via:\n  \
         1. {} flag\n  \
         2. {} environment variable\n  \
         3. 'kestractl config add <name> <host> <tenant> --token <token>' and optionally {}",
        field, flag, env_var, context_config::ENV_VAR
    )
}
