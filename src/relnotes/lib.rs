//! # Relnotes Architecture
//!
//! Release and setup tooling for the recruitment platform CLI. Two binaries
//! sit on top of one library:
//!
//! - `relnotes`: changelog section extraction, release-note merging, and
//!   changelog rotation (`## next` → `## <version>`)
//! - `batch-setup`: runs the platform CLI step by step to create a dataset,
//!   a batch and a study for one batch name
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/ for relnotes, batch_setup/ for the runner) │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) / Pipeline (pipeline/)                  │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over changelog/ transforms   │
//! │  - Reads and writes documents through a DocumentStore       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the binaries decide where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: facade over the changelog commands
//! - [`changelog`]: pure text transforms (extract, merge, update)
//! - [`commands`]: file-level operations and the `CmdResult` type
//! - [`pipeline`]: the batch setup step runner
//! - [`store`]: document storage abstraction
//! - [`config`]: project defaults in `.relnotes/config.json`
//! - [`error`]: error types

pub mod api;
pub mod changelog;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod store;

use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Version string shared by both binaries, including git hash and commit date
/// for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2026-01-15 14:30" for dev builds
pub fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("RELNOTES_GIT_HASH");
    const COMMIT_DATE: &str = env!("RELNOTES_COMMIT_DATE");
    const IS_RELEASE: &str = env!("RELNOTES_IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("relnotes={}", default_level)));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_starts_with_package_version() {
        let version = get_version();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(std::ptr::eq(version, get_version()));
    }
}
