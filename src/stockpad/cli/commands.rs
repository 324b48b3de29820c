use super::render::{print_messages, render_config, render_full_records, render_record_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use stockpad::api::{ConfigAction, RecordChanges, StockApi};
use stockpad::config::StockConfig;
use stockpad::error::Result;
use stockpad::store::fs_backend::FsBackend;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: StockApi<FsBackend>,
    config: StockConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Config must stay usable even when the inventory file is broken.
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(cwd, key, value);
    }

    let mut ctx = init_context(&cli, cwd)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Search { query }) => handle_search(&ctx, query),
        Some(Commands::Add {
            name,
            quantity,
            price,
        }) => handle_add(&mut ctx, &name, &quantity, &price),
        Some(Commands::Edit {
            index,
            name,
            qty,
            price,
        }) => handle_edit(
            &mut ctx,
            &index,
            RecordChanges {
                name,
                quantity: qty,
                price,
            },
        ),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Delete { indexes, yes }) => handle_delete(&mut ctx, indexes, yes),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { .. }) => unreachable!("handled before context init"),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli, cwd: PathBuf) -> Result<AppContext> {
    let config = StockConfig::load(&cwd)?;
    let data_file = match &cli.file {
        Some(path) => cwd.join(path),
        None => cwd.join(&config.data_file),
    };
    debug!(path = %data_file.display(), "using inventory file");

    let api = StockApi::open(FsBackend::new(data_file), cwd)?;
    Ok(AppContext { api, config })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_records()?;
    print!(
        "{}",
        render_record_list(&result.listed_records, &ctx.config.currency)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: Vec<String>) -> Result<()> {
    let query = query.join(" ");
    let result = ctx.api.search_records(&query)?;
    print!(
        "{}",
        render_record_list(&result.listed_records, &ctx.config.currency)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: &str, quantity: &str, price: &str) -> Result<()> {
    let result = ctx.api.add_record(name, quantity, price)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: &str, changes: RecordChanges) -> Result<()> {
    let result = ctx.api.edit_record(index, changes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_records(&indexes)?;
    print!(
        "{}",
        render_full_records(&result.listed_records, &ctx.config.currency)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>, yes: bool) -> Result<()> {
    if ctx.config.confirm_delete && !yes {
        let preview = ctx.api.view_records(&indexes)?;
        println!("This will delete the following records:");
        for dr in &preview.listed_records {
            println!("  {}. {}", dr.index, dr.record.name);
        }
        if !confirm("Delete? [y/N] ")? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_records(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.record_paths()?;
    for path in &result.record_paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(cwd: PathBuf, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = stockpad::commands::config::run(&cwd, action)?;

    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Reads a yes/no answer from stdin. Anything but `y`/`yes` is a no,
/// including a closed or non-interactive stdin with no input.
fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("{}", prompt);
        io::stdout().flush()?;
    }

    let mut input = String::new();
    stdin.lock().read_line(&mut input)?;
    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
