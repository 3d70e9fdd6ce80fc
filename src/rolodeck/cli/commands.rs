use super::menu::run_menu;
use super::render::{write_config, write_list, write_lookup, write_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use rolodeck::api::{ConfigAction, RolodeckApi};
use rolodeck::config::RolodeckConfig;
use rolodeck::error::Result;
use rolodeck::init::{default_data_dir, initialize};
use rolodeck::store::fs::FileStore;
use std::io::{self, Write};
use tracing::Level;

struct AppContext {
    api: RolodeckApi<FileStore>,
    config: RolodeckConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Lookup { term }) => handle_lookup(&ctx, term.join(" ")),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add { name, phone }) => handle_add(&mut ctx, &name, &phone),
        Some(Commands::Update { current, new }) => handle_update(&mut ctx, &current, &new),
        Some(Commands::Delete { phone }) => handle_delete(&mut ctx, &phone),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    let ctx = initialize(&data_dir);
    // One-shot commands keep stdout for their own output.
    if matches!(cli.command, Some(Commands::Menu) | None) {
        write_messages(&mut io::stdout().lock(), &ctx.messages)?;
    } else {
        write_messages(&mut io::stderr().lock(), &ctx.messages)?;
    }

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn handle_lookup(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.lookup(&term)?;
    let mut out = io::stdout().lock();
    write_lookup(&mut out, &result.listed_contacts)?;
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    let mut out = io::stdout().lock();
    write_list(&mut out, &result.listed_contacts)?;
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: &str, phone: &str) -> Result<()> {
    let result = ctx.api.add(name, phone)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_update(ctx: &mut AppContext, current: &str, new_phone: &str) -> Result<()> {
    let result = ctx.api.update(current, new_phone)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, phone: &str) -> Result<()> {
    let result = ctx.api.remove(phone)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.config.seed_defaults)?;
    write_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut out = io::stdout().lock();
    // Only a full listing prints the table; `set` reports through its message.
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            write_config(&mut out, config)?;
        }
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.contact_paths()?;
    let mut out = io::stdout().lock();
    for path in &result.paths {
        writeln!(out, "{}", path.display())?;
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    run_menu(&mut ctx.api, stdin.lock(), io::stdout().lock())?;
    Ok(())
}
