//! # Idea Box CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/idea_box/cli/` and
//! this file only invokes `cli::run()` and maps errors to the process exit.
//!
//! - `cli::setup`: clap argument definitions
//! - `cli::commands`: context wiring and per-command handlers
//! - `cli::print`: terminal output
//!
//! Usage and not-found errors are printed to stdout as short instructions.
//! Anything else (I/O, serialization) goes to stderr. Both exit with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        if e.is_user_facing() {
            println!("{}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
