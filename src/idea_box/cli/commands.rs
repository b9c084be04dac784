use super::print::{print_ideas, print_messages, print_stats};
use super::setup::{Cli, Commands};
use clap::Parser;
use idea_box::api::{CmdResult, IdeaBoxApi};
use idea_box::config::IdeaBoxConfig;
use idea_box::error::Result;
use idea_box::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: IdeaBoxApi<FileStore>,
}

pub fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut ctx = init_context();

    match cli.command {
        Commands::Add { text, tags } => handle_add(&mut ctx, text, tags),
        Commands::List => handle_list(&ctx),
        Commands::Search { query } => handle_search(&ctx, query),
        Commands::Tag { tag } => handle_tag(&ctx, tag),
        Commands::AddTag { id, tags } => handle_add_tags(&mut ctx, id, tags),
        Commands::Remove { id } => handle_remove(&mut ctx, id),
        Commands::Export { path } => handle_export(&ctx, path),
        Commands::Stats => handle_stats(&ctx),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context() -> AppContext {
    let config = IdeaBoxConfig::resolve();
    debug!(db = %config.db_path.display(), "resolved document path");
    AppContext {
        api: IdeaBoxApi::new(FileStore::new(config.db_path)),
    }
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>, tags: String) -> Result<()> {
    let result = ctx.api.add(text.as_slice(), &tags)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_listing(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: Vec<String>) -> Result<()> {
    let result = ctx.api.search(query.as_slice())?;
    print_listing(&result);
    Ok(())
}

fn handle_tag(ctx: &AppContext, tag: String) -> Result<()> {
    let result = ctx.api.tag(&tag)?;
    print_listing(&result);
    Ok(())
}

fn handle_add_tags(ctx: &mut AppContext, id: String, tags: Vec<String>) -> Result<()> {
    let result = ctx.api.add_tags(&id, tags.as_slice())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.remove(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.export(Some(&path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_listing(result: &CmdResult) {
    print_ideas(&result.listed_ideas);
    print_messages(&result.messages);
}
