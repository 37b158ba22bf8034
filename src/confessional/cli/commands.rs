use super::print::{
    print_categories, print_config, print_draft, print_full_confession, print_list,
    print_messages, print_stats, print_theme,
};
use super::setup::{Cli, Commands, DraftCommands};
use clap::Parser;
use confessional::api::{CategoryFilter, ConfessionApi, ConfigAction, Query, SortOrder};
use confessional::config::ConfessionConfig;
use confessional::error::{ConfessionError, Result};
use confessional::model::{Category, ConfessionId, ReactionKind};
use confessional::store::fs_backend::FsBackend;
use confessional::store::ConfessionStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: ConfessionApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New { text, category }) => handle_new(&mut ctx, &text.join(" "), &category),
        Some(Commands::List {
            category,
            search,
            sort,
        }) => handle_list(&mut ctx, &category, search, &sort),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::React { id, kind }) => handle_react(&mut ctx, &id, &kind),
        Some(Commands::Rate { id, stars }) => handle_rate(&mut ctx, &id, stars),
        Some(Commands::Comment { id, text }) => handle_comment(&mut ctx, &id, &text.join(" ")),
        Some(Commands::Fav { id }) => handle_fav(&mut ctx, &id),
        Some(Commands::Favorites) => handle_favorites(&ctx),
        Some(Commands::Random) => handle_random(&mut ctx),
        Some(Commands::Daily) => handle_daily(&ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Categories) => {
            print_categories();
            Ok(())
        }
        Some(Commands::Draft { action }) => handle_draft(&ctx, action),
        Some(Commands::Theme { show }) => handle_theme(&ctx, show),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, "all", None, "newest"),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "confessional=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("CONFESSIONAL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "confessional", "confessional")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ConfessionError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir(cli)?;
    tracing::debug!(dir = %dir.display(), "using data directory");

    let config = ConfessionConfig::load(&dir)?;
    let store = ConfessionStore::open(FsBackend::new(dir.clone()))?;
    let api = ConfessionApi::new(store, config).with_config_dir(dir);

    Ok(AppContext { api })
}

fn parse_id(id: &str) -> Result<ConfessionId> {
    id.parse()
}

fn handle_new(ctx: &mut AppContext, text: &str, category: &str) -> Result<()> {
    let category: Category = category.parse()?;
    let result = ctx.api.create(text, category)?;
    for confession in &result.affected {
        println!("{}", confession.id);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    category: &str,
    search: Option<String>,
    sort: &str,
) -> Result<()> {
    let filter: CategoryFilter = category.parse()?;
    let sort: SortOrder = sort.parse()?;
    let query = Query::new(filter, search.unwrap_or_default(), sort);

    let result = ctx.api.query(&query)?;
    print_list(&result.listed, ctx.api.store().favorites());
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get(parse_id(id)?)?;
    for confession in &result.listed {
        print_full_confession(confession, ctx.api.store().favorites());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_react(ctx: &mut AppContext, id: &str, kind: &str) -> Result<()> {
    let kind: ReactionKind = kind.parse()?;
    let result = ctx.api.react(parse_id(id)?, kind)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rate(ctx: &mut AppContext, id: &str, stars: u8) -> Result<()> {
    let result = ctx.api.rate(parse_id(id)?, stars)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_comment(ctx: &mut AppContext, id: &str, text: &str) -> Result<()> {
    let result = ctx.api.comment(parse_id(id)?, text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.toggle_favorite(parse_id(id)?)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.favorites()?;
    print_list(&result.listed, ctx.api.store().favorites());
    print_messages(&result.messages);
    Ok(())
}

fn handle_random(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.pick_random()?;
    for confession in &result.listed {
        print_full_confession(confession, ctx.api.store().favorites());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_daily(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.pick_daily_top()?;
    for confession in &result.listed {
        print_full_confession(confession, ctx.api.store().favorites());
    }
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

fn handle_draft(ctx: &AppContext, action: DraftCommands) -> Result<()> {
    let result = match action {
        DraftCommands::Save { text } => ctx.api.save_draft(&text.join(" "))?,
        DraftCommands::Show => ctx.api.load_draft()?,
        DraftCommands::Clear => ctx.api.clear_draft()?,
    };
    if let (Some(text), Some(status)) = (&result.draft, &result.draft_status) {
        print_draft(text, status);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &AppContext, show: bool) -> Result<()> {
    let result = if show {
        ctx.api.dark_mode()?
    } else {
        ctx.api.toggle_dark_mode()?
    };
    if show {
        if let Some(dark) = result.dark_mode {
            print_theme(dark);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
