use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fluentclip", version, about = "Clipboard history manager")]
pub struct Cli {
    /// TOML config file (`[storage] data_dir`, `[logging] file_logging`)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested subcommand; `run` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Run { interactive: false })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Watch the clipboard and record every change until Ctrl-C
    Run {
        /// Also read commands (select N, clear, capacity N, toggle, quit) from stdin
        #[arg(long)]
        interactive: bool,
    },
    /// Print the history, most recent first
    List {
        /// Print JSON instead of rows
        #[arg(long)]
        json: bool,
    },
    /// Print entries containing QUERY, ignoring case
    Search { query: String },
    /// Copy the entry at INDEX back to the clipboard
    Select { index: usize },
    /// Remove every entry
    Clear,
    /// Set how many entries are kept
    Capacity { capacity: usize },
}
