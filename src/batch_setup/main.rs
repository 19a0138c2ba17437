//! # batch-setup
//!
//! Creates everything one AI task builder batch needs by driving the platform
//! CLI: dataset, upload, batch, batch setup, and a study built from a template.
//! The plan and its inputs live in `batch-setup.json`; see
//! `relnotes::pipeline` for how steps are chained.
//!
//! ```text
//! batch-setup spring-pilot --var workspace_id=6512ab --var dataset_file=rows.csv
//! ```
//!
//! The first failing step ends the run with exit status 1 and the platform
//! CLI's own output on stderr.

use clap::Parser;
use colored::Colorize;
use relnotes::error::Result;
use relnotes::{get_version, init_tracing};
use relnotes::pipeline::config::{PipelineConfig, DEFAULT_CONFIG_FILE};
use relnotes::pipeline::runner::SystemRunner;
use relnotes::pipeline::Pipeline;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "batch-setup", version = get_version())]
#[command(about = "Create a dataset, batch and study for one batch name", long_about = None)]
struct Args {
    /// Name given to the dataset and batch
    batch_name: String,

    /// Pipeline configuration (defaults to ./batch-setup.json when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Set a template variable, overriding the config file
    #[arg(long = "var", value_name = "KEY=VALUE")]
    vars: Vec<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
    };
    for assignment in &args.vars {
        config.set_var(assignment)?;
    }
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let pipeline = Pipeline::new(load_config(&args)?);
    let total = pipeline.steps().len();
    let mut runner = SystemRunner::new();

    let result = pipeline.run(&args.batch_name, &mut runner, |index, step| {
        println!("{} {}", format!("[{}/{}]", index, total).dimmed(), step.name.bold());
    })?;

    println!();
    for message in &result.messages {
        println!("{}", message.content.green());
    }
    Ok(())
}
