//! # CLI Behavior
//!
//! This is **one possible UI client** for idea-box. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! Every invocation is a single pass: parse arguments, resolve the document
//! path, run one API call, print the `CmdResult`. Mutating commands (`add`,
//! `addtag`, `remove`) save the document before anything is printed.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `print`: rendering ideas, stats and messages
//! - `setup`: argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
