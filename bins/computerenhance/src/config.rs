use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

/// Run the given computerenhance course program.
#[derive(Debug, Parser)]
#[command(name = "computerenhance", version)]
pub struct Config {
    /// More logging on stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Disassemble the given file.
    Sim8086 {
        /// The binary file to disassemble
        file: PathBuf,

        /// Prefix each instruction with its offset and encoded bytes
        #[arg(short, long)]
        listing: bool,
    },
}

impl Config {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
