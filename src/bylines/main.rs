use bylines::api::{BylinesApi, CmdMessage, ConfigAction, MessageLevel};
use bylines::error::{BylinesError, Result};
use bylines::model::{LeaderboardEntry, Summary};
use bylines::report::layout::group_thousands;
use bylines::store::fs::FileStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: BylinesApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name }) => handle_add(&mut ctx, name),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Set {
            id,
            articles,
            views,
        }) => handle_set(&mut ctx, id, articles, views),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Report { start, end, out }) => handle_report(&ctx, start, end, out),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli);
    let store = FileStore::new(data_dir.clone());
    let (api, report) = BylinesApi::open(store, data_dir)?;

    if report.remapped_ids > 0 {
        println!(
            "{}",
            format!(
                "Repaired {} writer id(s); ids were renumbered",
                report.remapped_ids
            )
            .yellow()
        );
    }
    if let Some(warning) = &report.persist_warning {
        eprintln!(
            "{}",
            format!("Warning: could not write repaired store: {}", warning).yellow()
        );
    }

    Ok(AppContext { api })
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Some(home) = std::env::var_os("BYLINES_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs =
        ProjectDirs::from("com", "bylines", "bylines").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_add(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.create_writer(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_leaderboard()?;
    print_leaderboard(&result.entries);
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, id: String, articles: u64, views: u64) -> Result<()> {
    let result = ctx.api.set_stats(&id, articles, views)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.delete_writer(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(
    ctx: &AppContext,
    start: Option<String>,
    end: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let result = ctx.api.render_report(start.as_deref(), end.as_deref())?;
    let artifact = result
        .report
        .as_ref()
        .ok_or_else(|| BylinesError::Api("Report command returned no artifact".into()))?;

    let path = out.unwrap_or_else(|| PathBuf::from(&artifact.filename));
    std::fs::write(&path, &artifact.image.png).map_err(BylinesError::Io)?;

    print_messages(&result.messages);
    println!("{}", format!("Report written to {}", path.display()).green());
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.store_path()?;
    if let Some(path) = &result.store_path {
        println!("{}", path.display());
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
        println!(
            "font-path = {}",
            config.get("font-path").unwrap_or_default()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 42;
const COUNT_WIDTH: usize = 10;
const VIEWS_WIDTH: usize = 14;

fn print_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("No writers yet. Add one with `bylines add NAME`.");
        return;
    }

    let header = format!(
        "    {:<name$}{:>count$}{:>views$}{:>count$}",
        "WRITER",
        "ARTICLES",
        "VIEWS",
        "AVG",
        name = NAME_WIDTH,
        count = COUNT_WIDTH,
        views = VIEWS_WIDTH
    );
    println!("{}", header.dimmed());

    for (i, entry) in entries.iter().enumerate() {
        let rank = format!("{:>2}. ", i + 1);
        let name = truncate_to_width(&entry.name, NAME_WIDTH - 1);
        let padding = NAME_WIDTH.saturating_sub(name.width());

        let line = format!(
            "{}{}{}{:>count$}{:>views$}{:>count$}",
            rank,
            name,
            " ".repeat(padding),
            entry.articles,
            group_thousands(entry.views),
            entry.avg_views,
            count = COUNT_WIDTH,
            views = VIEWS_WIDTH
        );

        // Podium rows stand out; everything below reads flat
        if i < 3 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.normal());
        }
    }
}

fn print_summary(summary: &Summary) {
    println!(
        "\n{}",
        format!(
            "{} writer(s) · {} article(s) · {} view(s) · {} avg views/article",
            summary.total_writers,
            summary.total_articles,
            group_thousands(summary.total_views),
            summary.avg_views_per_article
        )
        .dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
