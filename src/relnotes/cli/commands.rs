use super::render::{eprint_messages, print_messages, render_config};
use super::setup::{parse_args, Commands};
use relnotes::api::{ConfigAction, RelnotesApi};
use relnotes::config::{RelnotesConfig, CONFIG_DIR};
use relnotes::error::Result;
use relnotes::init_tracing;
use relnotes::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: RelnotesApi<FileStore>,
    config: RelnotesConfig,
}

impl AppContext {
    fn changelog(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| PathBuf::from(&self.config.changelog))
    }
}

pub fn run() -> Result<()> {
    let cli = parse_args();
    init_tracing(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Commands::Extract {
            section,
            strip_comments,
            changelog,
            output,
        } => handle_extract(&mut ctx, section, strip_comments, changelog, output),
        Commands::Merge {
            manual,
            generated,
            fallback,
            output,
        } => handle_merge(&mut ctx, manual, generated, fallback, output),
        Commands::Update {
            version,
            notes,
            changelog,
        } => handle_update(&mut ctx, version, notes, changelog),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context() -> Result<AppContext> {
    let cwd = std::env::current_dir()?;
    let api = RelnotesApi::new(FileStore::new(&cwd), cwd.join(CONFIG_DIR));
    let config = api.load_config()?;
    Ok(AppContext { api, config })
}

fn handle_extract(
    ctx: &mut AppContext,
    section: String,
    strip_comments: bool,
    changelog: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let changelog = ctx.changelog(changelog);
    let result =
        ctx.api
            .extract_section(&changelog, &section, strip_comments, output.as_deref())?;

    match &result.output {
        Some(text) => {
            print!("{}", text);
            eprint_messages(&result.messages);
        }
        None => print_messages(&result.messages),
    }
    Ok(())
}

fn handle_merge(
    ctx: &mut AppContext,
    manual: PathBuf,
    generated: PathBuf,
    fallback: Option<String>,
    output: PathBuf,
) -> Result<()> {
    let fallback = fallback.unwrap_or_else(|| ctx.config.fallback.clone());
    let result = ctx
        .api
        .merge_notes(&manual, &generated, &fallback, &output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    version: String,
    notes: PathBuf,
    changelog: Option<PathBuf>,
) -> Result<()> {
    let changelog = ctx.changelog(changelog);
    let result = ctx.api.update_changelog(&changelog, &version, &notes)?;
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
        if result.messages.is_empty() {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
