//! Config command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::{AddContextArgs, Cli, ConfigAction, OutputFormat};
use crate::error::{KestraError, Result};

use super::models::Context;
use super::store::ContextStore;

/// Dispatch config subcommands
pub fn run_config_command(action: &ConfigAction, cli: &Cli) -> Result<()> {
    let store = ContextStore::new();
    match action {
        ConfigAction::Add(args) => run_config_add(&store, args, cli.token.as_deref()),
        ConfigAction::Remove(args) => run_config_remove(&store, &args.name),
        ConfigAction::Use(args) => run_config_use(&store, &args.name),
        ConfigAction::Show => run_config_show(&store, &cli.output),
    }
}

/// Add or replace a named context
fn run_config_add(store: &ContextStore, args: &AddContextArgs, token: Option<&str>) -> Result<()> {
    let token = token.ok_or_else(|| {
        KestraError::Config(format!(
            "A context stores an API token. Usage:\n  \
             kestractl config add {} {} {} --token <TOKEN> [--default]",
            args.name, args.host, args.tenant
        ))
    })?;

    let mut config = store.load()?;

    let existed = config
        .contexts
        .insert(
            args.name.clone(),
            Context {
                host: args.host.clone(),
                tenant: args.tenant.clone(),
                token: Some(token.to_string()),
            },
        )
        .is_some();

    // Becomes the default when requested, or when no usable default exists
    let has_default = config
        .default_context
        .as_ref()
        .is_some_and(|name| config.contexts.contains_key(name));
    if args.default || !has_default {
        config.default_context = Some(args.name.clone());
    }

    store.save(&config)?;

    let verb = if existed { "Updated" } else { "Added" };
    if config.is_default(&args.name) {
        println!("✓ {} context '{}' (default)", verb, args.name);
    } else {
        println!("✓ {} context '{}'", verb, args.name);
    }

    Ok(())
}

/// Remove a named context
fn run_config_remove(store: &ContextStore, name: &str) -> Result<()> {
    let mut config = store.load()?;

    if config.contexts.remove(name).is_none() {
        return Err(KestraError::NotFound(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.available_names()
        )));
    }

    // Clear the default pointer if it referenced the removed context;
    // no other context is promoted implicitly
    if config.is_default(name) {
        config.default_context = None;
    }

    store.save(&config)?;
    println!("✓ Removed context '{}'", name);

    Ok(())
}

/// Set the default context
fn run_config_use(store: &ContextStore, name: &str) -> Result<()> {
    let mut config = store.load()?;

    if !config.contexts.contains_key(name) {
        return Err(KestraError::NotFound(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.available_names()
        )));
    }

    config.default_context = Some(name.to_string());
    store.save(&config)?;
    println!("✓ Default context is now '{}'", name);

    Ok(())
}

/// Display configured contexts
fn run_config_show(store: &ContextStore, output: &OutputFormat) -> Result<()> {
    let config = store.load()?;

    if let OutputFormat::Json = output {
        let json = serde_json::to_string_pretty(&config)?;
        println!("{}", json);
        return Ok(());
    }

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!(
            "\nUse 'kestractl config add <name> <host> <tenant> --token <token>' to create one."
        );
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("DEFAULT"),
            Cell::new("NAME"),
            Cell::new("HOST"),
            Cell::new("TENANT"),
            Cell::new("TOKEN"),
        ]);

    for (name, ctx) in &config.contexts {
        let default_marker = if config.is_default(name) { "*" } else { "" };
        let token_display = mask_token(ctx.token.as_deref());

        table.add_row(vec![
            Cell::new(default_marker),
            Cell::new(name),
            Cell::new(&ctx.host),
            Cell::new(&ctx.tenant),
            Cell::new(&token_display),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Mask a token for display, keeping only the last 4 chars
fn mask_token(token: Option<&str>) -> String {
    match token {
        Some(t) if t.len() >= 4 => format!("****{}", &t[t.len() - 4..]),
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}
