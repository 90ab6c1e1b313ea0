//! # CLI Behavior
//!
//! The terminal client for notelog. It is the only place that knows about terminal
//! I/O, exit codes and output formatting; see the crate-level docs of the library for
//! the layers underneath.
//!
//! ### Naked Execution (`notelog`)
//!
//! Running `notelog` with no arguments starts a session, same as `notelog session`.
//! Notes are kept in memory and are gone when the session ends.
//!
//! ### Piped Input
//!
//! `printf 'a\nb\n' | notelog session --summary` logs every line of stdin and prints
//! the list on exit. No prompt is shown when stdin is not a terminal.
//!
//! ### Configuration (`notelog config`)
//!
//! `config.json` lives in the platform config dir, or in `--config-dir` /
//! `NOTELOG_CONFIG_DIR` when given.

mod commands;
mod render;
mod session;
mod setup;

pub use commands::run;
