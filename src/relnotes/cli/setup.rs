use clap::{Parser, Subcommand};
use relnotes::get_version;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "relnotes", bin_name = "relnotes", version = get_version())]
#[command(about = "Extract, merge and rotate changelog release notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the body of one changelog section
    #[command(display_order = 1)]
    Extract {
        /// Section name without the leading "## " (e.g. next, 0.0.60)
        #[arg(long)]
        section: String,

        /// Drop <!-- --> comments and collapse blank lines
        #[arg(long)]
        strip_comments: bool,

        /// Changelog to read (defaults to the configured changelog)
        #[arg(long, value_name = "PATH")]
        changelog: Option<PathBuf>,

        /// Write the section to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Merge manual and generated release notes into one file
    #[command(display_order = 2)]
    Merge {
        /// Hand-written notes
        #[arg(long, value_name = "PATH")]
        manual: PathBuf,

        /// Generator-produced notes
        #[arg(long, value_name = "PATH")]
        generated: PathBuf,

        /// Text used when both sources are empty (defaults to the configured fallback)
        #[arg(long, value_name = "TEXT")]
        fallback: Option<String>,

        /// Where to write the merged notes
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Add a version entry and reset the "## next" section
    #[command(display_order = 3)]
    Update {
        /// Version being released (e.g. 0.0.60)
        #[arg(long = "version", id = "release_version", value_name = "SEMVER")]
        version: String,

        /// File holding the notes for this version
        #[arg(long, value_name = "PATH")]
        notes: PathBuf,

        /// Changelog to rewrite (defaults to the configured changelog)
        #[arg(long, value_name = "PATH")]
        changelog: Option<PathBuf>,
    },

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (changelog, fallback)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Parses arguments. Usage errors go to stderr and exit with status 1;
/// `--help` and `--version` exit with 0.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}
