//! Command-line surface: one subcommand per user action, plus the
//! interactive loop when no subcommand is given.

mod commands;
mod repl;

use clap::{Parser, Subcommand};

use namecast::client::Gender;

pub(crate) use commands::{cmd_clear, cmd_lookup, cmd_save, cmd_saved};
pub(crate) use repl::run_repl;

/// Name-to-gender lookup with a local saved-answer store.
#[derive(Parser)]
#[command(name = "namecast", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Look up the predicted gender for a name.
    Lookup {
        /// Name to look up.
        name: String,
    },
    /// Save a confirmed gender for a name, overwriting any previous answer.
    Save {
        /// Name to save.
        name: String,
        /// Confirmed gender: male or female.
        gender: Gender,
    },
    /// Remove the saved answer for a name.
    Clear {
        /// Name to clear.
        name: String,
    },
    /// Show the saved answer for a name, or list all saved answers.
    Saved {
        /// Name to show; omit to list everything.
        name: Option<String>,
    },
}
