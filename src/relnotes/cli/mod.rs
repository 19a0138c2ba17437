//! # CLI Behavior
//!
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting. For the layering, see the crate-level documentation of
//! the `relnotes` library.
//!
//! ## Release Workflow
//!
//! A release pipeline typically runs the three commands in order:
//!
//! 1. `relnotes extract --section next --strip-comments -o manual.md`
//!    pulls the hand-written notes collected under `## next`.
//! 2. `relnotes merge --manual manual.md --generated generated.md -o notes.md`
//!    joins them with the notes produced from commit history.
//! 3. `relnotes update --version 1.4.0 --notes notes.md` moves the notes under
//!    `## 1.4.0` and resets `## next` to its empty template.
//!
//! `extract` without `--output` prints the section on stdout and keeps its
//! diagnostics on stderr, so it can be piped.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `render`: message and config output
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
